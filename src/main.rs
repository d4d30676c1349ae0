#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up ADMIN_ID, DATABASE_PATH, etc.
    let _ = dotenvy::dotenv();
    lucio_api::logging::init();

    let config = lucio_api::config::config().clone();
    lucio_api::server::run(config).await
}
