#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use lucio_api::config::AppConfig;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::task::JoinHandle;

pub const ADMIN_ID: i64 = 741824476;
pub const ADMIN_HEADER: &str = "X-Admin-Id";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub database_path: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Fresh store, bootstrap, admin gate configured with `ADMIN_ID`.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(|config| config.security.admin.admin_id = Some(ADMIN_ID)).await
    }

    /// Same as `spawn`, but the admin identity is left at its shipped default.
    pub async fn spawn_unconfigured() -> Result<Self> {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(configure: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);
        let mut config = AppConfig::from_lookup(|_| None);
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        config.database.path = std::env::temp_dir()
            .join(format!("lucio_it_{}.db", uuid::Uuid::new_v4().simple()))
            .to_string_lossy()
            .into_owned();
        config.api.enable_request_logging = false;
        configure(&mut config);
        let database_path = config.database.path.clone();

        let (app, _store) = lucio_api::server::prepare(config).await?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let server = Self {
            port,
            base_url,
            database_path,
            handle,
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    /// GET /products as parsed JSON.
    pub async fn list(&self, client: &reqwest::Client) -> Result<Vec<Value>> {
        let res = client.get(self.url("/products")).send().await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "list failed: {}", res.status());
        Ok(res.json::<Vec<Value>>().await?)
    }

    pub async fn ids(&self, client: &reqwest::Client) -> Result<Vec<i64>> {
        Ok(self
            .list(client)
            .await?
            .iter()
            .filter_map(|p| p["id"].as_i64())
            .collect())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.database_path, suffix));
        }
    }
}

pub fn product(brand: &str, price: i64) -> Value {
    serde_json::json!({
        "brand": brand,
        "price": price,
        "color": "red",
        "img": "u"
    })
}
