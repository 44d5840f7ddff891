//! Client for the generative-text completion service used for enrichment.

pub mod client;
pub mod error;
pub mod generator;
pub mod types;

pub use client::{GeminiClient, GeminiSettings};
pub use error::GenAiError;
pub use generator::TextGenerator;
pub use types::{Schema, SchemaType};
