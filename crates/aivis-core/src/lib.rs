//! Shared domain types and configuration for the AI visibility monitor.

pub mod app_config;
pub mod competitor;
pub mod config;
pub mod insight;
pub mod roster;

use thiserror::Error;

pub use app_config::AppConfig;
pub use competitor::{CompetitorEstimate, CompetitorRecord, Provenance, Sentiment};
pub use config::{load_app_config, load_app_config_from_env};
pub use insight::{BrandInsight, Priority};
pub use roster::{load_roster, parse_roster, RosterEntry, RosterFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read roster file {path}: {source}")]
    RosterFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster file: {0}")]
    RosterFileParse(#[from] serde_yaml::Error),

    #[error("roster validation failed: {0}")]
    Validation(String),
}
