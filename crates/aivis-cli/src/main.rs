mod competitors;
mod insights;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::competitors::CompetitorCommands;

#[derive(Debug, Parser)]
#[command(name = "aivis")]
#[command(about = "Track competitor visibility in AI-generated answers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect or extend the tracked competitor list
    Competitors {
        #[command(subcommand)]
        command: CompetitorCommands,
    },
    /// Generate prioritized insights from brand visibility data
    Insights {
        /// Brand the data describes
        brand: String,

        /// Path to a JSON file with the visibility data to analyze
        #[arg(long)]
        data: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = aivis_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Competitors { command } => competitors::run(&config, command).await,
        Commands::Insights { brand, data, json } => {
            insights::run(&config, &brand, &data, json).await
        }
    }
}
