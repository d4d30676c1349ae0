use crate::config::AppConfig;

pub async fn handle(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    crate::server::run(config).await
}
