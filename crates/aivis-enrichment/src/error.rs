use aivis_genai::GenAiError;
use thiserror::Error;

/// Why an enrichment request could not produce a usable result.
///
/// Every variant means the same thing to callers: the service is
/// unavailable for this request. Public operations absorb these errors and
/// substitute fallback data; they are surfaced only in logs.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("generative service unavailable: {0}")]
    Service(#[from] GenAiError),

    #[error("model output is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model output has unexpected shape: {0}")]
    Shape(String),
}
