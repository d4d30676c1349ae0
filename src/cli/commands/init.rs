use anyhow::Context;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{self, BootstrapReport, ProductRepository, Store};

pub async fn handle(config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let store = Store::open(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.path))?;
    let outcome = bootstrap(&store).await;
    store.close().await;
    let (report, total) = outcome?;

    let message = match report.seeded {
        0 => format!("Store {} already initialized ({} products)", store.path(), total),
        n => format!("Initialized store {} with {} seed products", store.path(), n),
    };
    output_success(
        &output_format,
        &message,
        Some(json!({ "database": store.path(), "seeded": report.seeded, "products": total })),
    )
}

/// Run bootstrap and count what the table holds afterwards.
async fn bootstrap(store: &Store) -> anyhow::Result<(BootstrapReport, i64)> {
    let report = database::initialize(store).await?;
    let total = ProductRepository::new(store.clone()).count().await?;
    Ok((report, total))
}
