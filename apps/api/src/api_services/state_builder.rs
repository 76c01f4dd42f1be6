use std::sync::Arc;

use dealerdesk_application::{DealerPermissionService, ProductViewService};
use dealerdesk_core::AppError;
use dealerdesk_domain::FieldCatalog;

use crate::api_config::ApiConfig;
use crate::state::AppState;

use super::permission_source::build_permission_source;

pub fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let permission_source = build_permission_source(config.permission_backend.as_ref())?;

    Ok(AppState {
        permission_service: DealerPermissionService::new(
            permission_source,
            config.missing_allow_list_policy,
        ),
        product_view_service: ProductViewService::new(Arc::new(FieldCatalog::dealer_products())),
    })
}
