use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

#[derive(Debug, Error)]
pub enum CorsConfigError {
    #[error("invalid CORS origin: {0}")]
    Origin(String),
    #[error("invalid CORS method: {0}")]
    Method(String),
    #[error("invalid CORS header: {0}")]
    Header(String),
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e == "*")
}

/// Build the CORS layer from the configured allow-lists.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, CorsConfigError> {
    let origins = if is_wildcard(&config.allow_origins) {
        AllowOrigin::any()
    } else {
        let list = config
            .allow_origins
            .iter()
            .map(|o| HeaderValue::from_str(o).map_err(|_| CorsConfigError::Origin(o.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(list)
    };

    let methods = if is_wildcard(&config.allow_methods) {
        AllowMethods::any()
    } else {
        let list = config
            .allow_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.to_ascii_uppercase().as_bytes())
                    .map_err(|_| CorsConfigError::Method(m.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowMethods::list(list)
    };

    let headers = if is_wildcard(&config.allow_headers) {
        AllowHeaders::any()
    } else {
        let list = config
            .allow_headers
            .iter()
            .map(|h| {
                HeaderName::from_bytes(h.as_bytes())
                    .map_err(|_| CorsConfigError::Header(h.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowHeaders::list(list)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers))
}
