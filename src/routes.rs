use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{protected, public};
use crate::middleware::{cors_layer, require_admin, CorsConfigError};
use crate::state::AppState;

/// Build the full application router with its global layers.
pub fn app(state: AppState) -> Result<Router, CorsConfigError> {
    let cors = cors_layer(&state.config.security.cors)?;

    let router: Router<AppState> = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(product_routes(state.clone()))
        .fallback(not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(state.config.api.max_request_size_bytes))
        .layer(cors);

    let router = if state.config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    Ok(router.with_state(state))
}

fn product_routes(state: AppState) -> Router<AppState> {
    let reads: Router<AppState> = Router::new().route("/products", get(public::product_list));

    // route_layer only wraps routes added before it; reads are merged after
    Router::new()
        .route("/products", post(protected::product_create))
        .route(
            "/products/:id",
            put(protected::product_update).delete(protected::product_delete),
        )
        .route_layer(from_fn_with_state(state, require_admin))
        .merge(reads)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
