//! AI-backed enrichment for competitor tracking.
//!
//! [`CompetitorEnrichment`] estimates visibility score, mention count and
//! sentiment for a new competitor through a [`TextGenerator`], sanitizes the
//! untrusted output, and falls back to synthetic values when the service is
//! unavailable. [`BrandInsights`] summarizes visibility data into prioritized
//! insights under the same never-fail contract. [`CompetitorTracker`] holds
//! the session's append-only competitor collection.
//!
//! [`TextGenerator`]: aivis_genai::TextGenerator

pub mod competitor;
pub mod error;
pub mod fallback;
pub mod insights;
pub mod tracker;

mod prompt;
mod sanitize;

#[cfg(test)]
mod testing;

pub use competitor::CompetitorEnrichment;
pub use error::EnrichmentError;
pub use fallback::{fallback_estimate, FALLBACK_MENTIONS_RANGE, FALLBACK_SCORE_RANGE};
pub use insights::BrandInsights;
pub use tracker::{validate_input, AddCompetitorError, CompetitorTracker, RequestTicket};
