use anyhow::{Context, Result};
use bfclsync::{config::SyncConfig, fetch, process, store};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cfg = SyncConfig::from_env()?;

    // ─── fetch ───────────────────────────────────────────────────────
    info!(url = %cfg.csv_url, "fetching leaderboard data");
    let client = Client::new();
    let csv_text = fetch::csv_text(&client, cfg.csv_url.as_str())
        .await
        .context("fetching leaderboard CSV")?;

    // ─── transform ───────────────────────────────────────────────────
    let entries = process::entries_from_csv(&csv_text, cfg.top_n);
    info!(entries = entries.len(), "processed leaderboard rows");

    // ─── persist ─────────────────────────────────────────────────────
    store::sync_document(&cfg.output_path, entries).context("updating leaderboard document")?;

    info!("done");
    Ok(())
}
