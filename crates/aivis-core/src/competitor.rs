//! Competitor records and the closed sentiment category.

use serde::{Deserialize, Serialize};

/// Upper bound of the visibility score scale.
pub const MAX_VISIBILITY_SCORE: u8 = 100;

/// Tone of AI-generated text toward a brand.
///
/// The wire literals are exactly `"Positive"`, `"Neutral"` and `"Negative"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Match one of the three literals exactly (case-sensitive).
    #[must_use]
    pub fn parse_exact(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Coerce a value from an untrusted source into the closed set.
    ///
    /// Anything that is not exactly one of the literals becomes `Neutral`.
    #[must_use]
    pub fn from_untrusted(raw: &str) -> Self {
        Self::parse_exact(raw).unwrap_or(Sentiment::Neutral)
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where a competitor's metrics came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Parsed from the generative service's response.
    Ai,
    /// Synthesized locally because the service was unavailable.
    Fallback,
    /// Loaded from the seed roster file.
    Roster,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Ai => write!(f, "ai"),
            Provenance::Fallback => write!(f, "fallback"),
            Provenance::Roster => write!(f, "roster"),
        }
    }
}

/// A tracked competitor as held in the session's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    /// Display name, exactly as the caller supplied it.
    pub name: String,
    /// Visibility in AI answers, `0..=100`.
    pub visibility_score: u8,
    pub mentions: u64,
    pub sentiment: Sentiment,
    pub provenance: Provenance,
}

/// Enrichment output before the caller reattaches the competitor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitorEstimate {
    pub visibility_score: u8,
    pub mentions: u64,
    pub sentiment: Sentiment,
    pub provenance: Provenance,
}

impl CompetitorEstimate {
    #[must_use]
    pub fn into_record(self, name: impl Into<String>) -> CompetitorRecord {
        CompetitorRecord {
            name: name.into(),
            visibility_score: self.visibility_score,
            mentions: self.mentions,
            sentiment: self.sentiment,
            provenance: self.provenance,
        }
    }
}
