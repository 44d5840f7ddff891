//! Terminal output for command results.

use std::fmt::Write as _;

use aivis_core::{BrandInsight, CompetitorRecord};

pub(crate) fn competitors(records: &[CompetitorRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        print!("{}", competitor_table(records));
    }
    Ok(())
}

pub(crate) fn insights(insights: &[BrandInsight], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(insights)?);
    } else {
        print!("{}", insight_list(insights));
    }
    Ok(())
}

fn competitor_table(records: &[CompetitorRecord]) -> String {
    if records.is_empty() {
        return "no competitors tracked\n".to_string();
    }

    let width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>10}  {:>8}  {:<9}  SOURCE",
        "NAME", "VISIBILITY", "MENTIONS", "SENTIMENT"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<width$}  {:>9}%  {:>8}  {:<9}  {}",
            r.name, r.visibility_score, r.mentions, r.sentiment, r.provenance
        );
    }
    out
}

fn insight_list(insights: &[BrandInsight]) -> String {
    if insights.is_empty() {
        return "no insights available\n".to_string();
    }

    let mut out = String::new();
    for (i, item) in insights.iter().enumerate() {
        let _ = writeln!(out, "{}. [{}] {}", i + 1, item.priority, item.insight);
    }
    out
}
