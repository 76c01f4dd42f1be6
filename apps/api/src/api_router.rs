use axum::Router;
use axum::routing::{get, post};
use dealerdesk_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let api_routes = Router::new()
        .route(
            "/api/dealers/{dealer_id}/field-access",
            get(handlers::product_views::field_access_handler),
        )
        .route(
            "/api/dealers/{dealer_id}/product-views",
            post(handlers::product_views::render_product_view_handler),
        )
        .route(
            "/api/dealers/{dealer_id}/product-table",
            post(handlers::product_views::product_table_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
