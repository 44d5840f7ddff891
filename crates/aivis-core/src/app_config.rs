use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Empty when unset; every enrichment then takes the fallback path.
    pub gemini_api_key: String,
    pub genai_model: String,
    pub genai_base_url: String,
    /// `None` means requests never time out.
    pub genai_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub competitors_path: Option<PathBuf>,
}

impl AppConfig {
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "gemini_api_key",
                &if self.has_api_key() {
                    "[redacted]"
                } else {
                    "[unset]"
                },
            )
            .field("genai_model", &self.genai_model)
            .field("genai_base_url", &self.genai_base_url)
            .field("genai_timeout_secs", &self.genai_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("competitors_path", &self.competitors_path)
            .finish()
    }
}
