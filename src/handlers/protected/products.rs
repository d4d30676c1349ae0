// handlers/protected/products.rs - Catalog mutation handlers
//
// Body and path extraction errors are taken as `Result` so they surface in
// the shared JSON error format instead of axum's plain-text rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Extension, Json,
};
use tracing::debug;

use crate::database::models::{NewProduct, ProductPatch};
use crate::middleware::{Ack, AdminUser, ApiResponse, ApiResult, CreatedId};
use crate::state::AppState;

/// POST /products - Create a product, returns `{ "id": <new id> }`
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminUser>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<CreatedId> {
    let Json(product) = payload?;
    debug!(admin = admin.id, "Create product request");

    let id = state.catalog.create(product).await?;
    Ok(ApiResponse::success(CreatedId { id }))
}

/// PUT /products/:id - Apply a sparse patch
///
/// Reports `{ "ok": true }` even when no product has this id.
pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminUser>,
    id: Result<Path<i64>, PathRejection>,
    patch: Result<Json<ProductPatch>, JsonRejection>,
) -> ApiResult<Ack> {
    let Path(id) = id?;
    let Json(patch) = patch?;
    debug!(admin = admin.id, id, "Update product request");

    state.catalog.update(id, patch).await?;
    Ok(ApiResponse::success(Ack::ok()))
}

/// DELETE /products/:id - Remove a product; missing ids are not an error
pub async fn delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminUser>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Ack> {
    let Path(id) = id?;
    debug!(admin = admin.id, id, "Delete product request");

    state.catalog.delete(id).await?;
    Ok(ApiResponse::success(Ack::ok()))
}
