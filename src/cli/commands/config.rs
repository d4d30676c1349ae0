use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::middleware::cors_layer;

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Validate the configuration; fails when ADMIN_ID is not set")]
    Check,
}

pub async fn handle(
    cmd: ConfigCommands,
    config: AppConfig,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Check => {
            let _cors = cors_layer(&config.security.cors)?;

            let summary = summarize(&config);
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => {
                    println!("Environment:  {:?}", config.environment);
                    println!("Listen:       {}:{}", config.server.host, config.server.port);
                    println!("Database:     {}", config.database.path);
                    println!("Admin header: {}", config.security.admin.header);
                    let admin_state = if config.security.admin.is_configured() {
                        "configured"
                    } else {
                        "NOT CONFIGURED"
                    };
                    println!("Admin id:     {}", admin_state);
                    println!("CORS origins: {}", config.security.cors.allow_origins.join(", "));
                    println!("CORS methods: {}", config.security.cors.allow_methods.join(", "));
                    println!("CORS headers: {}", config.security.cors.allow_headers.join(", "));
                }
            }

            if !config.security.admin.is_configured() {
                anyhow::bail!("ADMIN_ID is not configured; mutating endpoints will return 500");
            }
            Ok(())
        }
    }
}

/// The admin id itself is never echoed.
fn summarize(config: &AppConfig) -> Value {
    json!({
        "environment": format!("{:?}", config.environment),
        "listen": format!("{}:{}", config.server.host, config.server.port),
        "database": config.database.path,
        "admin": {
            "header": config.security.admin.header,
            "configured": config.security.admin.is_configured(),
        },
        "cors": config.security.cors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_hides_admin_id() {
        let mut config = AppConfig::from_lookup(|_| None);
        config.security.admin.admin_id = Some(741824476);

        let summary = summarize(&config);
        assert_eq!(summary["admin"]["configured"], true);
        assert!(!summary.to_string().contains("741824476"));
        assert_eq!(summary["cors"]["allow_origins"][0], "*");
    }

    #[tokio::test]
    async fn check_fails_on_invalid_cors_entries() {
        let mut config = AppConfig::from_lookup(|_| None);
        config.security.admin.admin_id = Some(741824476);
        config.security.cors.allow_headers = vec!["x admin".to_string()];

        let err = handle(ConfigCommands::Check, config, OutputFormat::Json)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid CORS header"), "{}", err);
    }

    #[tokio::test]
    async fn check_fails_without_admin_id() {
        let config = AppConfig::from_lookup(|_| None);
        let err = handle(ConfigCommands::Check, config, OutputFormat::Json)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ADMIN_ID"), "{}", err);
    }
}
