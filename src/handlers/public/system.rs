// handlers/public/system.rs - GET / and GET /health handlers

use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::state::AppState;

/// GET / - Service name, version and endpoint map
pub async fn root(State(state): State<AppState>) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "Lucio API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Product catalog backend",
        "endpoints": {
            "list": "GET /products (public)",
            "create": "POST /products (admin)",
            "update": "PUT /products/:id (admin)",
            "delete": "DELETE /products/:id (admin)",
            "health": "GET /health (public)",
        },
        "admin": {
            "header": state.admin.header(),
            "configured": state.admin.is_configured(),
        }
    }))
}

/// GET /health - Liveness plus a store ping; 503 when the store is unreachable
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok"
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiResponse::with_status(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            )
        }
    }
}
