mod conversions;
pub mod types;

pub use types::{
    DealerProductRequest, FieldAccessResponse, ProductTableRequest, ProductTableResponse,
    ProductViewResponse,
};
