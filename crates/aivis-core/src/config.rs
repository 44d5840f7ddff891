use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_GENAI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_USER_AGENT: &str = "aivis/0.1 (visibility-monitoring)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. A missing `GEMINI_API_KEY` yields an empty
/// credential rather than an error.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_secs = |var: &str| -> Result<Option<u64>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(Some(secs))
    };

    let log_level = or_default("AIVIS_LOG_LEVEL", "info");

    let gemini_api_key = lookup("GEMINI_API_KEY").unwrap_or_default();
    let genai_model = or_default("AIVIS_GENAI_MODEL", DEFAULT_GENAI_MODEL);
    if genai_model.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "AIVIS_GENAI_MODEL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let genai_base_url = or_default("AIVIS_GENAI_BASE_URL", DEFAULT_GENAI_BASE_URL);
    let genai_timeout_secs = parse_optional_secs("AIVIS_GENAI_TIMEOUT_SECS")?;

    let user_agent = or_default("AIVIS_USER_AGENT", DEFAULT_USER_AGENT);
    let competitors_path = lookup("AIVIS_COMPETITORS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        gemini_api_key,
        genai_model,
        genai_base_url,
        genai_timeout_secs,
        user_agent,
        competitors_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
