//! `competitors` command handlers.

use aivis_core::AppConfig;
use aivis_enrichment::{validate_input, CompetitorEnrichment, CompetitorTracker};
use aivis_genai::GeminiClient;
use clap::Subcommand;

use crate::render;

#[derive(Debug, Subcommand)]
pub enum CompetitorCommands {
    /// Show the competitors loaded from the roster
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Analyze a new competitor and add it to the list
    Add {
        /// Display name of the competitor
        name: String,

        /// Competitor website
        url: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub(crate) async fn run(config: &AppConfig, command: CompetitorCommands) -> anyhow::Result<()> {
    let mut tracker = load_tracker(config)?;

    match command {
        CompetitorCommands::List { json } => render::competitors(tracker.records(), json),
        CompetitorCommands::Add { name, url, json } => {
            if add_competitor(config, &mut tracker, &name, &url).await? {
                render::competitors(tracker.records(), json)
            } else {
                eprintln!("cancelled; no competitor was added");
                Ok(())
            }
        }
    }
}

/// Build the session's tracker, seeded from the roster file when configured.
fn load_tracker(config: &AppConfig) -> anyhow::Result<CompetitorTracker> {
    let Some(path) = config.competitors_path.as_deref() else {
        return Ok(CompetitorTracker::new());
    };

    let roster = aivis_core::load_roster(path)?;
    tracing::debug!(
        path = %path.display(),
        count = roster.competitors.len(),
        "competitor roster loaded"
    );
    Ok(CompetitorTracker::with_roster(roster.into_records()))
}

/// Add one competitor, racing the request against Ctrl-C.
///
/// Returns `false` when the user cancelled; dropping the pending add aborts
/// the request and nothing is appended.
async fn add_competitor(
    config: &AppConfig,
    tracker: &mut CompetitorTracker,
    name: &str,
    url: &str,
) -> anyhow::Result<bool> {
    validate_input(name, url)?;

    if !config.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set, the estimate will be synthetic");
    }
    let enrichment = CompetitorEnrichment::new(GeminiClient::from_config(config)?);

    let pending = async { tracker.add(&enrichment, name, url).await.map(|_| ()) };
    tokio::select! {
        added = pending => {
            added?;
            Ok(true)
        }
        _ = tokio::signal::ctrl_c() => Ok(false),
    }
}
