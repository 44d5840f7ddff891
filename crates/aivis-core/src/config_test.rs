use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.gemini_api_key, "");
    assert!(!cfg.has_api_key());
    assert_eq!(cfg.genai_model, "gemini-3-flash-preview");
    assert_eq!(
        cfg.genai_base_url,
        "https://generativelanguage.googleapis.com"
    );
    assert!(cfg.genai_timeout_secs.is_none());
    assert_eq!(cfg.user_agent, "aivis/0.1 (visibility-monitoring)");
    assert!(cfg.competitors_path.is_none());
}

#[test]
fn build_app_config_reads_api_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key, "secret-key");
    assert!(cfg.has_api_key());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-key"), "key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn genai_model_override() {
    let mut map = HashMap::new();
    map.insert("AIVIS_GENAI_MODEL", "gemini-2.5-pro");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.genai_model, "gemini-2.5-pro");
}

#[test]
fn genai_model_empty_fails() {
    let mut map = HashMap::new();
    map.insert("AIVIS_GENAI_MODEL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIVIS_GENAI_MODEL"),
        "expected InvalidEnvVar(AIVIS_GENAI_MODEL), got: {result:?}"
    );
}

#[test]
fn genai_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("AIVIS_GENAI_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.genai_timeout_secs, Some(45));
}

#[test]
fn genai_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("AIVIS_GENAI_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIVIS_GENAI_TIMEOUT_SECS"),
        "expected InvalidEnvVar(AIVIS_GENAI_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn genai_timeout_secs_zero_fails() {
    let mut map = HashMap::new();
    map.insert("AIVIS_GENAI_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIVIS_GENAI_TIMEOUT_SECS"),
        "expected InvalidEnvVar(AIVIS_GENAI_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn competitors_path_override() {
    let mut map = HashMap::new();
    map.insert("AIVIS_COMPETITORS_PATH", "./config/competitors.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.competitors_path,
        Some(PathBuf::from("./config/competitors.yaml"))
    );
}

#[test]
fn unrelated_variables_are_ignored() {
    let mut map = HashMap::new();
    map.insert("AIVIS_ENV", "producton");
    map.insert("AIVIS_UNKNOWN", "x");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
}
