//! Seed roster of competitors loaded at session start.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::competitor::{CompetitorRecord, Provenance, Sentiment, MAX_VISIBILITY_SCORE};
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub visibility_score: u8,
    pub mentions: u64,
    pub sentiment: Sentiment,
}

impl RosterEntry {
    #[must_use]
    pub fn to_record(&self) -> CompetitorRecord {
        CompetitorRecord {
            name: self.name.clone(),
            visibility_score: self.visibility_score,
            mentions: self.mentions,
            sentiment: self.sentiment,
            provenance: Provenance::Roster,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub competitors: Vec<RosterEntry>,
}

impl RosterFile {
    #[must_use]
    pub fn into_records(self) -> Vec<CompetitorRecord> {
        self.competitors.iter().map(RosterEntry::to_record).collect()
    }
}

/// Load and validate a competitor roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_roster(path: &Path) -> Result<RosterFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_roster(&content)
}

/// Parse and validate roster YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_roster(content: &str) -> Result<RosterFile, ConfigError> {
    let roster: RosterFile = serde_yaml::from_str(content)?;
    validate_roster(&roster)?;
    Ok(roster)
}

fn validate_roster(roster: &RosterFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for entry in &roster.competitors {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "competitor name must be non-empty".to_string(),
            ));
        }

        if entry.visibility_score > MAX_VISIBILITY_SCORE {
            return Err(ConfigError::Validation(format!(
                "competitor '{}' has visibility_score {}; must be at most {MAX_VISIBILITY_SCORE}",
                entry.name, entry.visibility_score
            )));
        }

        if !seen_names.insert(entry.name.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate competitor name: '{}'",
                entry.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
competitors:
  - name: CloudBox
    visibility_score: 42
    mentions: 124
    sentiment: Neutral
  - name: SalesPro
    visibility_score: 38
    mentions: 98
    sentiment: Positive
";

    #[test]
    fn parses_sample_roster_in_order() {
        let records = parse_roster(SAMPLE).unwrap().into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "CloudBox");
        assert_eq!(records[1].name, "SalesPro");
        assert_eq!(records[1].sentiment, Sentiment::Positive);
        assert!(records.iter().all(|r| r.provenance == Provenance::Roster));
    }

    #[test]
    fn empty_document_yields_empty_roster() {
        let roster = parse_roster("competitors: []").unwrap();
        assert!(roster.competitors.is_empty());
    }

    #[test]
    fn rejects_score_above_scale() {
        let yaml = "competitors:\n  - {name: A, visibility_score: 101, mentions: 1, sentiment: Neutral}\n";
        let err = parse_roster(yaml).unwrap_err();
        assert!(err.to_string().contains("visibility_score 101"), "{err}");
    }

    #[test]
    fn rejects_blank_name() {
        let yaml = "competitors:\n  - {name: '  ', visibility_score: 1, mentions: 1, sentiment: Neutral}\n";
        let err = parse_roster(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_case_insensitive_duplicates() {
        let yaml = "competitors:\n  - {name: CloudBox, visibility_score: 1, mentions: 1, sentiment: Neutral}\n  - {name: cloudbox, visibility_score: 2, mentions: 2, sentiment: Neutral}\n";
        let err = parse_roster(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn rejects_sentiment_outside_closed_set() {
        let yaml = "competitors:\n  - {name: A, visibility_score: 1, mentions: 1, sentiment: positive}\n";
        let err = parse_roster(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::RosterFileParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_roster(Path::new("/nonexistent/competitors.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/competitors.yaml"));
    }
}
