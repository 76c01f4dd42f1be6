mod common;
pub mod product_views;

pub use common::HealthResponse;
pub use product_views::{
    DealerProductRequest, FieldAccessResponse, ProductTableRequest, ProductTableResponse,
    ProductViewResponse,
};
