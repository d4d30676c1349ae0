use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite file; created on first open.
    pub path: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout: u64,
    /// Seconds SQLite waits on a locked database before failing.
    pub busy_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub admin: AdminConfig,
    pub cors: CorsConfig,
}

/// Identity allowed to create, update and delete products.
///
/// The admin id ships unset. Until a deployer provides a positive id every
/// mutating request fails with a server error instead of falling open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub admin_id: Option<i64>,
    /// Request header carrying the caller's identity.
    pub header: String,
}

impl AdminConfig {
    pub const DEFAULT_HEADER: &'static str = "X-Admin-Id";

    pub fn is_configured(&self) -> bool {
        matches!(self.admin_id, Some(id) if id > 0)
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            admin_id: None,
            header: Self::DEFAULT_HEADER.to_string(),
        }
    }
}

/// Cross-origin allow-lists. A single `*` entry allows anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let any = || vec!["*".to_string()];
        Self {
            allow_origins: any(),
            allow_methods: any(),
            allow_headers: any(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(lookup)
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Server overrides
        if let Some(v) = lookup("LUCIO_HOST") {
            self.server.host = v;
        }
        if let Some(port) = lookup("LUCIO_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|v| v.parse().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_PATH") {
            self.database.path = v;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout =
                v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Some(v) = lookup("DATABASE_BUSY_TIMEOUT") {
            self.database.busy_timeout = v.parse().unwrap_or(self.database.busy_timeout);
        }

        // API overrides
        if let Some(v) = lookup("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Some(v) = lookup("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        // Security overrides
        if let Some(v) = lookup("ADMIN_ID") {
            // An unparseable id leaves the gate unconfigured rather than guessing
            self.security.admin.admin_id = v.trim().parse().ok();
        }
        if let Some(v) = lookup("ADMIN_HEADER") {
            if !v.trim().is_empty() {
                self.security.admin.header = v.trim().to_string();
            }
        }
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            self.security.cors.allow_origins = split_list(&v);
        }
        if let Some(v) = lookup("SECURITY_CORS_METHODS") {
            self.security.cors.allow_methods = split_list(&v);
        }
        if let Some(v) = lookup("SECURITY_CORS_HEADERS") {
            self.security.cors.allow_headers = split_list(&v);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig {
                path: "lucio.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
                busy_timeout: 5,
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
            security: SecurityConfig::default(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 10,
                ..Self::development().database
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 256 * 1024,
            },
            ..Self::development()
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 5,
                ..Self::development().database
            },
            api: ApiConfig {
                enable_request_logging: false,
                max_request_size_bytes: 256 * 1024,
            },
            ..Self::development()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// Global singleton config - read by the entry points only
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_development_config() {
        let config = from_pairs(&[]);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.path, "lucio.db");
        assert!(config.api.enable_request_logging);
        assert!(!config.security.admin.is_configured());
        assert_eq!(config.security.admin.header, "X-Admin-Id");
        assert_eq!(config.security.cors.allow_origins, vec!["*"]);
    }

    #[test]
    fn test_default_production_config() {
        let config = from_pairs(&[("APP_ENV", "prod")]);
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.api.enable_request_logging);
        assert_eq!(config.database.connection_timeout, 5);
    }

    #[test]
    fn env_overrides_apply() {
        let config = from_pairs(&[
            ("PORT", "9100"),
            ("DATABASE_PATH", "/tmp/catalog.db"),
            ("ADMIN_ID", " 741824476 "),
            ("ADMIN_HEADER", "X-Telegram-Id"),
            ("SECURITY_CORS_ORIGINS", "https://shop.example.com, https://admin.example.com,"),
        ]);
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.database.path, "/tmp/catalog.db");
        assert_eq!(config.security.admin.admin_id, Some(741824476));
        assert_eq!(config.security.admin.header, "X-Telegram-Id");
        assert_eq!(
            config.security.cors.allow_origins,
            vec!["https://shop.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn lucio_port_wins_over_port() {
        let config = from_pairs(&[("PORT", "1"), ("LUCIO_PORT", "9200")]);
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn admin_is_configured_only_for_positive_ids() {
        let mut admin = AdminConfig::default();
        assert!(!admin.is_configured());

        admin.admin_id = Some(0);
        assert!(!admin.is_configured());

        admin.admin_id = Some(-5);
        assert!(!admin.is_configured());

        admin.admin_id = Some(42);
        assert!(admin.is_configured());
    }

    #[test]
    fn unparseable_admin_id_stays_unconfigured() {
        let config = from_pairs(&[("ADMIN_ID", "put-your-id-here")]);
        assert_eq!(config.security.admin.admin_id, None);
        assert!(!config.security.admin.is_configured());
    }
}
