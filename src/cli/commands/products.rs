use anyhow::Context;
use clap::Subcommand;

use crate::cli::utils::output_products;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{ProductRepository, Store};

#[derive(Subcommand)]
pub enum ProductCommands {
    #[command(about = "List every product, newest first")]
    List,

    #[command(about = "Show one product")]
    Show {
        #[arg(help = "Product id")]
        id: i64,
    },
}

pub async fn handle(
    cmd: ProductCommands,
    config: AppConfig,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let store = Store::open(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.path))?;
    let repository = ProductRepository::new(store.clone());

    let products = match cmd {
        ProductCommands::List => repository.select_all().await.map(Some),
        ProductCommands::Show { id } => repository
            .select_one(id)
            .await
            .map(|found| found.map(|product| vec![product])),
    };
    store.close().await;

    match products.context("failed to read products; run `lucio init` first?")? {
        Some(products) => output_products(&output_format, &products),
        None => anyhow::bail!("No product with that id in {}", store.path()),
    }
}
