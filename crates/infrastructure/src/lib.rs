//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_permission_source;
mod in_memory_permission_source;

pub use http_permission_source::HttpPermissionSource;
pub use in_memory_permission_source::InMemoryPermissionSource;
