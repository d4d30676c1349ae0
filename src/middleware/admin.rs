use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use thiserror::Error;
use tracing::warn;

use crate::config::AdminConfig;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("admin identity is not configured")]
    NotConfigured,
    #[error("identity {presented} is not the admin")]
    Forbidden { presented: i64 },
}

/// Admin identity that passed the gate, inserted into request extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminUser {
    pub id: i64,
}

/// Authorizes mutating requests against the one configured admin identity.
#[derive(Clone, Debug)]
pub struct AdminGate {
    config: AdminConfig,
}

impl AdminGate {
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn header(&self) -> &str {
        &self.config.header
    }

    /// Identity presented in the configured header; missing or non-integer
    /// values read as 0, which is never privileged.
    pub fn presented_identity(&self, headers: &HeaderMap) -> i64 {
        headers
            .get(self.config.header.as_str())
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }

    pub fn authorize(&self, headers: &HeaderMap) -> Result<AdminUser, AdminError> {
        let admin_id = match self.config.admin_id {
            Some(id) if self.config.is_configured() => id,
            _ => return Err(AdminError::NotConfigured),
        };

        let presented = self.presented_identity(headers);
        if presented != admin_id {
            return Err(AdminError::Forbidden { presented });
        }

        Ok(AdminUser { id: presented })
    }
}

/// Route middleware guarding create, update and delete.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let admin = state.admin.authorize(request.headers()).map_err(|err| {
        let (method, uri) = (request.method(), request.uri());
        match &err {
            AdminError::NotConfigured => {
                warn!(%method, %uri, "Rejected write: ADMIN_ID is not configured")
            }
            AdminError::Forbidden { presented } => {
                warn!(%method, %uri, presented, "Rejected write from non-admin")
            }
        }
        ApiError::from(err)
    })?;

    request.extensions_mut().insert(admin);
    Ok(next.run(request).await)
}
