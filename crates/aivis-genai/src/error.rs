use thiserror::Error;

/// Errors returned by the generative-text client.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No credential was configured; the request is not sent.
    #[error("no API key configured for the generative service")]
    MissingApiKey,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The service answered with a non-2xx status.
    #[error("generative service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered 2xx but produced no candidate text.
    #[error("generative service returned no text (finish reason: {finish_reason})")]
    EmptyResponse { finish_reason: String },
}
