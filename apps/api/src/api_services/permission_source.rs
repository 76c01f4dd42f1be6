use std::sync::Arc;

use dealerdesk_application::PermissionSource;
use dealerdesk_core::AppError;
use dealerdesk_infrastructure::{HttpPermissionSource, InMemoryPermissionSource};
use tracing::{info, warn};

use crate::api_config::PermissionBackendConfig;

pub fn build_permission_source(
    backend: Option<&PermissionBackendConfig>,
) -> Result<Arc<dyn PermissionSource>, AppError> {
    let Some(backend) = backend else {
        warn!(
            "PERMISSION_API_BASE_URL is not set; using an empty in-memory permission source, every dealer resolves to denied field access"
        );
        return Ok(Arc::new(InMemoryPermissionSource::new()));
    };

    let http_client = reqwest::Client::builder()
        .timeout(backend.timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    info!(base_url = %backend.base_url, "using HTTP permission source");

    Ok(Arc::new(HttpPermissionSource::new(
        http_client,
        backend.base_url.clone(),
        backend.api_token.clone(),
    )))
}
