use async_trait::async_trait;

use crate::error::GenAiError;
use crate::types::Schema;

/// A service that turns a natural-language instruction into JSON text.
///
/// [`GeminiClient`](crate::GeminiClient) is the production implementation;
/// tests substitute scripted fakes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion and return the raw model output.
    async fn generate(&self, prompt: &str, schema: Option<&Schema>) -> Result<String, GenAiError>;
}
