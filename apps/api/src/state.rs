use dealerdesk_application::{DealerPermissionService, ProductViewService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub permission_service: DealerPermissionService,
    pub product_view_service: ProductViewService,
}
