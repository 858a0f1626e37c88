use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;
use url::Url;

/// CSV export published alongside the leaderboard page.
pub const DATA_CSV_URL: &str = "https://gorilla.cs.berkeley.edu/data_overall.csv";
/// Where the merged JSON document lands by default.
pub const DEFAULT_OUTPUT_PATH: &str = "bfcl-leaderboard.json";
/// Keep only the head of the table so the file stays small and relevant.
pub const DEFAULT_TOP_N: usize = 20;

/// Settings for one sync run. The transformer and merger take these as
/// parameters rather than reading globals, so each stays testable on its own.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub csv_url: Url,
    pub output_path: PathBuf,
    pub top_n: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            csv_url: Url::parse(DATA_CSV_URL).expect("default CSV URL should be valid"),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SyncConfig {
    /// Defaults overridden by `BFCL_CSV_URL`, `BFCL_OUTPUT` and `BFCL_TOP_N`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(raw) = get("BFCL_CSV_URL") {
            cfg.csv_url =
                Url::parse(&raw).with_context(|| format!("invalid BFCL_CSV_URL {raw:?}"))?;
        }
        if let Some(raw) = get("BFCL_OUTPUT") {
            if !raw.trim().is_empty() {
                cfg.output_path = PathBuf::from(raw);
            }
        }
        if let Some(raw) = get("BFCL_TOP_N") {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => cfg.top_n = n,
                _ => warn!(value = %raw, "ignoring malformed BFCL_TOP_N"),
            }
        }

        Ok(cfg)
    }
}
