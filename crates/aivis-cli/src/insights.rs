use std::path::Path;

use aivis_core::AppConfig;
use aivis_enrichment::BrandInsights;
use aivis_genai::GeminiClient;
use anyhow::Context;

use crate::render;

/// Read visibility data from `data_path` and print insights for `brand`.
pub(crate) async fn run(
    config: &AppConfig,
    brand: &str,
    data_path: &Path,
    json: bool,
) -> anyhow::Result<()> {
    if brand.trim().is_empty() {
        anyhow::bail!("brand name must not be empty");
    }

    let raw = std::fs::read_to_string(data_path)
        .with_context(|| format!("failed to read {}", data_path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", data_path.display()))?;

    let insights = BrandInsights::new(GeminiClient::from_config(config)?)
        .generate(brand, &data)
        .await;

    render::insights(&insights, json)
}
