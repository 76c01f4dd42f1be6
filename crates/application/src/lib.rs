//! Application services and ports.

#![forbid(unsafe_code)]

mod permission_ports;
mod permission_service;
mod product_view_service;

pub use permission_ports::PermissionSource;
pub use permission_service::{DealerPermissionService, LoadedPermissions};
pub use product_view_service::{
    DealerProductView, FieldAccessEntry, FieldAccessSummary, FieldDisplay, FieldView,
    ProductRow, ProductTablePage, ProductViewService, SectionView,
};
