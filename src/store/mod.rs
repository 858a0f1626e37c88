use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::process::LeaderboardEntry;

pub const META_SOURCE: &str = "Berkeley Function-Calling Leaderboard (BFCL) V4";
pub const META_URL: &str = "https://gorilla.cs.berkeley.edu/leaderboard.html";
pub const META_DESCRIPTION: &str = "Evaluates LLM ability to call functions/tools accurately";

/// The persisted document. Keys this tool does not own are carried through
/// writes untouched, both at the top level and inside `meta`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Merge `entries` into the document at `path` and write it back.
///
/// Volatile meta fields (`source`, `url`, `last_updated`) are refreshed on
/// every run; `description` is written once and then left to whoever edits
/// the file. The leaderboard itself is replaced wholesale, empty or not.
/// Returns the number of entries written.
pub fn sync_document(path: &Path, entries: Vec<LeaderboardEntry>) -> Result<usize> {
    let mut doc = load_document(path);

    let today = Local::now().format("%Y-%m-%d").to_string();
    doc.meta
        .insert("source".to_string(), Value::String(META_SOURCE.to_string()));
    doc.meta
        .insert("url".to_string(), Value::String(META_URL.to_string()));
    doc.meta
        .insert("last_updated".to_string(), Value::String(today));
    if !doc.meta.contains_key("description") {
        doc.meta.insert(
            "description".to_string(),
            Value::String(META_DESCRIPTION.to_string()),
        );
    }

    let count = entries.len();
    doc.leaderboard = entries;

    write_document(path, &doc)?;
    info!(path = %path.display(), entries = count, "leaderboard updated");
    Ok(count)
}

/// Read the existing document, or start fresh when it is missing or does not
/// decode. Recovery path, never an error.
fn load_document(path: &Path) -> Document {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() != ErrorKind::NotFound {
                warn!(path = %path.display(), %err, "unreadable document, starting fresh");
            }
            return Document::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(path = %path.display(), %err, "corrupt document, starting fresh");
            Document::default()
        }
    }
}

/// Serialize pretty-printed and swap into place via a temp file so an
/// interrupted run never leaves a truncated document behind.
fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let json = serde_json::to_string_pretty(doc).context("serializing document")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
