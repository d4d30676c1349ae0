pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "lucio")]
#[command(about = "Lucio CLI - operate the product catalog backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "SQLite database path (overrides DATABASE_PATH)")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP API server")]
    Serve {
        #[arg(long, help = "Interface to bind (overrides LUCIO_HOST)")]
        host: Option<String>,
        #[arg(long, help = "Port to bind (overrides LUCIO_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Create the products table and seed it if empty")]
    Init,

    #[command(about = "Read the product catalog")]
    Products {
        #[command(subcommand)]
        cmd: commands::products::ProductCommands,
    },

    #[command(about = "Inspect the effective configuration")]
    Config {
        #[command(subcommand)]
        cmd: commands::config::ConfigCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// `--text` wins when both flags are given.
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json && !cli.text {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    let mut config = AppConfig::from_env();
    if let Some(path) = cli.database {
        config.database.path = path;
    }

    match cli.command {
        Commands::Serve { host, port } => commands::serve::handle(config, host, port).await,
        Commands::Init => commands::init::handle(config, output_format).await,
        Commands::Products { cmd } => commands::products::handle(cmd, config, output_format).await,
        Commands::Config { cmd } => commands::config::handle(cmd, config, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lucio", "products", "list", "--json", "--database", "x.db"])
            .unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        assert_eq!(cli.database.as_deref(), Some("x.db"));
    }

    #[test]
    fn text_flag_takes_precedence_over_json() {
        let cli = Cli::try_parse_from(["lucio", "--json", "--text", "products", "list"]).unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Text);

        let cli = Cli::try_parse_from(["lucio", "products", "list"]).unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Text);
    }

    #[test]
    fn parses_product_show() {
        let cli = Cli::try_parse_from(["lucio", "products", "show", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Products {
                cmd: commands::products::ProductCommands::Show { id: 5 }
            }
        ));
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from(["lucio", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }
}
