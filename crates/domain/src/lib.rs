//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod catalog;
mod field;
mod permissions;
mod product;
mod view_state;
mod visibility;

pub use access::{AccessContext, FieldAccessResolver, MissingAllowListPolicy};
pub use catalog::{FieldCatalog, FieldCatalogEntry};
pub use field::{FieldGroup, ProductField};
pub use permissions::{DealerPermissionSnapshot, DealerPermissions};
pub use product::{DealerProduct, DealerProductInput, FieldValue, ProductStatus};
pub use view_state::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PRODUCT_TABLE_COLUMNS, PageWindow, ProductTab,
    ProductTableViewState, SortDirection, TableSort,
};
pub use visibility::VisibilityResult;
