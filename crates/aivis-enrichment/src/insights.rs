//! Free-text insights about a brand's visibility data.

use aivis_core::BrandInsight;
use aivis_genai::TextGenerator;

use crate::error::EnrichmentError;
use crate::prompt::{insights_prompt, insights_schema};
use crate::sanitize::parse_insights;

pub struct BrandInsights<G> {
    generator: G,
}

impl<G: TextGenerator> BrandInsights<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Ask for a short list of prioritized, actionable insights about
    /// `data` for `brand_name`.
    ///
    /// Any failure yields an empty list; nothing is retried.
    pub async fn generate(&self, brand_name: &str, data: &serde_json::Value) -> Vec<BrandInsight> {
        match self.request_insights(brand_name, data).await {
            Ok(insights) => {
                tracing::info!(brand = brand_name, count = insights.len(), "insights generated");
                insights
            }
            Err(e) => {
                tracing::warn!(brand = brand_name, error = %e, "insight generation failed");
                Vec::new()
            }
        }
    }

    async fn request_insights(
        &self,
        brand_name: &str,
        data: &serde_json::Value,
    ) -> Result<Vec<BrandInsight>, EnrichmentError> {
        let prompt = insights_prompt(brand_name, data);
        let schema = insights_schema();
        let text = self.generator.generate(&prompt, Some(&schema)).await?;
        parse_insights(&text)
    }
}
