use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::process::label::{normalize_category, split_model_label};

/// One row of the source table, keyed by the published header names.
/// Extra columns are ignored; a missing Organization column is tolerated.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Rank")]
    rank: String,
    #[serde(rename = "Model", default)]
    model: String,
    #[serde(rename = "Organization")]
    organization: Option<String>,
    #[serde(rename = "Overall Acc")]
    overall_acc: String,
}

/// Normalized leaderboard row as stored in the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub model: String,
    pub provider: String,
    pub accuracy: f64,
    #[serde(rename = "type")]
    pub category: String,
}

/// Parse the raw CSV export into the ranked, truncated leaderboard.
///
/// Rows that fail coercion are dropped with a diagnostic and processing
/// continues. The survivors are re-sorted by rank rather than trusting the
/// source order, then cut to `top_n`. Header-only or empty input yields an
/// empty list.
pub fn entries_from_csv(csv_text: &str, top_n: usize) -> Vec<LeaderboardEntry> {
    let mut reader = ReaderBuilder::new().from_reader(csv_text.as_bytes());
    let mut entries = Vec::new();

    for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                warn!(row = idx + 1, %err, "skipping unreadable row");
                continue;
            }
        };
        match entry_from_row(&row) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!(row = idx + 1, model = %row.model, %err, "skipping row"),
        }
    }

    entries.sort_by_key(|entry| entry.rank);
    entries.truncate(top_n);
    entries
}

fn entry_from_row(row: &RawRow) -> Result<LeaderboardEntry> {
    let rank: i64 = row
        .rank
        .trim()
        .parse()
        .with_context(|| format!("bad rank {:?}", row.rank))?;
    let accuracy: f64 = strip_percent(&row.overall_acc)
        .parse()
        .with_context(|| format!("bad accuracy {:?}", row.overall_acc))?;

    let (model, category) = split_model_label(&row.model);

    Ok(LeaderboardEntry {
        rank,
        model,
        provider: row
            .organization
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        accuracy,
        category: normalize_category(&category),
    })
}

/// Drop a single trailing `%` if present.
fn strip_percent(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end()
}
