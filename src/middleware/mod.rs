pub mod admin;
pub mod cors;
pub mod response;

pub use admin::{require_admin, AdminError, AdminGate, AdminUser};
pub use cors::{cors_layer, CorsConfigError};
pub use response::{Ack, ApiResponse, ApiResult, CreatedId};
