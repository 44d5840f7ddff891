//! Synthetic estimates used when the generative service is unavailable.

use std::ops::RangeInclusive;

use aivis_core::{CompetitorEstimate, Provenance, Sentiment};
use rand::Rng;

pub const FALLBACK_SCORE_RANGE: RangeInclusive<u8> = 10..=59;
pub const FALLBACK_MENTIONS_RANGE: RangeInclusive<u64> = 50..=549;

/// Draw a plausible estimate from the thread-local RNG.
#[must_use]
pub fn fallback_estimate() -> CompetitorEstimate {
    fallback_estimate_with(&mut rand::rng())
}

/// Draw a plausible estimate from `rng`.
///
/// Score and mentions are uniform over [`FALLBACK_SCORE_RANGE`] and
/// [`FALLBACK_MENTIONS_RANGE`]; sentiment is always `Neutral`.
pub fn fallback_estimate_with<R: Rng>(rng: &mut R) -> CompetitorEstimate {
    CompetitorEstimate {
        visibility_score: rng.random_range(FALLBACK_SCORE_RANGE),
        mentions: rng.random_range(FALLBACK_MENTIONS_RANGE),
        sentiment: Sentiment::Neutral,
        provenance: Provenance::Fallback,
    }
}
