pub mod health;
pub mod product_views;
