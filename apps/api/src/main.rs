//! DealerDesk API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;

use dealerdesk_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    info!(
        missing_allow_list_policy = config.missing_allow_list_policy.as_str(),
        "loaded api configuration"
    );

    let app_state = api_services::build_app_state(&config)?;
    let app = api_router::build_router(app_state, config.frontend_url.as_str())?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "dealerdesk api listening");
    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server failed: {error}")))
}
