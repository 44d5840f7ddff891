//! Competitor enrichment: estimate visibility metrics for a newly added brand.

use aivis_core::CompetitorEstimate;
use aivis_genai::TextGenerator;

use crate::error::EnrichmentError;
use crate::fallback::fallback_estimate;
use crate::prompt::{competitor_prompt, competitor_schema};
use crate::sanitize::parse_estimate;

/// Asks a [`TextGenerator`] for a competitor's visibility score, mention
/// count and sentiment.
///
/// Holds no state besides the injected generator.
pub struct CompetitorEnrichment<G> {
    generator: G,
}

impl<G: TextGenerator> CompetitorEnrichment<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Estimate metrics for the brand `name` hosted at `url`.
    ///
    /// Callers must pass a `name` and `url` that are non-empty after
    /// trimming; this method does not check. The service is called exactly
    /// once with no retry. If it is unreachable, errors, or returns output
    /// that does not decode, a [`Provenance::Fallback`] estimate is
    /// synthesized instead, so this never fails.
    ///
    /// [`Provenance::Fallback`]: aivis_core::Provenance::Fallback
    pub async fn enrich(&self, name: &str, url: &str) -> CompetitorEstimate {
        match self.request_estimate(name, url).await {
            Ok(estimate) => {
                tracing::info!(
                    competitor = name,
                    visibility_score = estimate.visibility_score,
                    mentions = estimate.mentions,
                    sentiment = %estimate.sentiment,
                    "competitor analysis complete"
                );
                estimate
            }
            Err(e) => {
                tracing::warn!(
                    competitor = name,
                    error = %e,
                    "competitor analysis unavailable, using fallback estimate"
                );
                fallback_estimate()
            }
        }
    }

    async fn request_estimate(
        &self,
        name: &str,
        url: &str,
    ) -> Result<CompetitorEstimate, EnrichmentError> {
        let prompt = competitor_prompt(name, url);
        let schema = competitor_schema();
        let text = self.generator.generate(&prompt, Some(&schema)).await?;
        parse_estimate(&text)
    }
}
