use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use dealerdesk_core::DealerId;
use dealerdesk_domain::DealerProduct;
use tracing::info;

use crate::dto::{
    DealerProductRequest, FieldAccessResponse, ProductTableRequest, ProductTableResponse,
    ProductViewResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn field_access_handler(
    State(state): State<AppState>,
    Path(dealer_id): Path<String>,
) -> ApiResult<Json<FieldAccessResponse>> {
    let dealer_id = DealerId::from_str(dealer_id.as_str())?;
    let loaded = state.permission_service.load(dealer_id).await;
    let summary = state
        .product_view_service
        .field_access(&loaded.permissions);

    Ok(Json(FieldAccessResponse::from_summary(
        dealer_id,
        loaded.is_fallback,
        &summary,
    )))
}

pub async fn render_product_view_handler(
    State(state): State<AppState>,
    Path(dealer_id): Path<String>,
    Json(payload): Json<DealerProductRequest>,
) -> ApiResult<Json<ProductViewResponse>> {
    let dealer_id = DealerId::from_str(dealer_id.as_str())?;
    let product = DealerProduct::try_from(payload)?;
    let loaded = state.permission_service.load(dealer_id).await;
    let view = state
        .product_view_service
        .render(&loaded.permissions, &product);

    info!(
        %dealer_id,
        sku_code = product.sku_code().as_str(),
        degraded = loaded.is_fallback,
        "rendered dealer product view"
    );

    Ok(Json(ProductViewResponse::from_view(
        dealer_id,
        loaded.is_fallback,
        &view,
    )))
}

pub async fn product_table_handler(
    State(state): State<AppState>,
    Path(dealer_id): Path<String>,
    Json(payload): Json<ProductTableRequest>,
) -> ApiResult<Json<ProductTableResponse>> {
    let dealer_id = DealerId::from_str(dealer_id.as_str())?;
    let view_state = payload.view_state()?;
    let products = payload
        .products
        .into_iter()
        .map(DealerProduct::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let loaded = state.permission_service.load(dealer_id).await;
    let page = state
        .product_view_service
        .list_products(&loaded.permissions, &products, &view_state);

    Ok(Json(ProductTableResponse::from_page(
        dealer_id,
        loaded.is_fallback,
        &page,
    )))
}
