//! Scripted generator for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use aivis_genai::{GenAiError, Schema, TextGenerator};
use async_trait::async_trait;

/// Replays canned outputs in order and records every prompt it receives.
///
/// Once the script is exhausted, every call fails with `MissingApiKey`.
pub(crate) struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenAiError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(crate) fn new(replies: impl IntoIterator<Item = Result<String, GenAiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator whose every call fails, as if the service were down.
    pub(crate) fn exhausted() -> Self {
        Self::new(VecDeque::new())
    }

    pub(crate) fn replying(text: &str) -> Self {
        Self::new([Ok(text.to_string())])
    }

    pub(crate) fn repeating(text: &str, times: usize) -> Self {
        Self::new(std::iter::repeat_with(|| Ok(text.to_string())).take(times))
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _schema: Option<&Schema>) -> Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenAiError::MissingApiKey))
    }
}
