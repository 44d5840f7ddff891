//! Validation and coercion of untrusted model output.
//!
//! Everything the generative service returns is treated as external input:
//! the sentiment is forced into the closed set, the visibility score is
//! clamped to `0..=100` and mentions are floored at zero.

use aivis_core::competitor::MAX_VISIBILITY_SCORE;
use aivis_core::{BrandInsight, CompetitorEstimate, Provenance, Sentiment};
use serde_json::Value;

use crate::error::EnrichmentError;
use crate::prompt::{MENTIONS_FIELD, SENTIMENT_FIELD, VISIBILITY_SCORE_FIELD};

/// Decode the service's text into a sanitized estimate.
///
/// # Errors
///
/// Returns [`EnrichmentError::Malformed`] if the text is not JSON and
/// [`EnrichmentError::Shape`] if it is not an object carrying numeric
/// `visibilityScore` and `mentions`. A missing or non-string `sentiment`
/// is not an error; it becomes `Neutral`.
pub(crate) fn parse_estimate(text: &str) -> Result<CompetitorEstimate, EnrichmentError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))?;
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(EnrichmentError::Shape(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            )))
        }
    };

    let score = number_field(&fields, VISIBILITY_SCORE_FIELD)?;
    let mentions = count_field(&fields, MENTIONS_FIELD)?;
    let sentiment = fields
        .get(SENTIMENT_FIELD)
        .and_then(Value::as_str)
        .map_or(Sentiment::Neutral, Sentiment::from_untrusted);

    Ok(CompetitorEstimate {
        visibility_score: clamp_visibility_score(score),
        mentions,
        sentiment,
        provenance: Provenance::Ai,
    })
}

/// Decode the service's text into a list of insights.
///
/// Accepts a bare array or an object wrapping one under `insights`. Empty
/// output is an empty list.
///
/// # Errors
///
/// Returns [`EnrichmentError`] if the text is not JSON or any element does
/// not match `{insight, priority}` with a known priority.
pub(crate) fn parse_insights(text: &str) -> Result<Vec<BrandInsight>, EnrichmentError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(body)?;
    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => fields.remove("insights").ok_or_else(|| {
            EnrichmentError::Shape("object without an `insights` array".to_string())
        })?,
        other => {
            return Err(EnrichmentError::Shape(format!(
                "expected a JSON array, got {}",
                kind_of(&other)
            )))
        }
    };

    Ok(serde_json::from_value(list)?)
}

/// Round and clamp a raw score into `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_visibility_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, f64::from(MAX_VISIBILITY_SCORE)) as u8
}

/// Round a raw mention count and floor it at zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_mentions(raw: f64) -> u64 {
    // Float-to-int casts saturate, so huge values land on u64::MAX.
    raw.round().max(0.0) as u64
}

/// Read a non-negative count, keeping JSON integers exact.
///
/// Integers pass through unchanged and negative ones floor at zero; only
/// fractional numbers and numeric strings take the rounding path.
fn count_field(
    fields: &serde_json::Map<String, Value>,
    name: &str,
) -> Result<u64, EnrichmentError> {
    if let Some(Value::Number(n)) = fields.get(name) {
        if let Some(count) = n.as_u64() {
            return Ok(count);
        }
        if n.as_i64().is_some() {
            return Ok(0);
        }
    }
    number_field(fields, name).map(clamp_mentions)
}

fn number_field(
    fields: &serde_json::Map<String, Value>,
    name: &str,
) -> Result<f64, EnrichmentError> {
    let value = fields
        .get(name)
        .ok_or_else(|| EnrichmentError::Shape(format!("missing `{name}`")))?;

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| EnrichmentError::Shape(format!("`{name}` is not a number: {value}")))
}

/// Remove a surrounding Markdown code fence, which some models emit even in
/// JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop an info string such as `json` or `JSON` on the opening fence line.
    let rest = match rest.split_once('\n') {
        Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body,
        _ => strip_json_tag(rest),
    };
    rest.trim()
}

fn strip_json_tag(text: &str) -> &str {
    match text.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &text[4..],
        _ => text,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
