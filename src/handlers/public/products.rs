// handlers/public/products.rs - GET /products handler

use axum::extract::State;

use crate::database::models::Product;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /products - Every product, newest first. No pagination.
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let products = state.catalog.list().await?;
    Ok(ApiResponse::success(products))
}
