use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tokio::time::sleep;
use tracing::warn;

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Fetch the raw leaderboard CSV from `url`.
///
/// Transient transport failures are retried a few times; a non-2xx status is
/// returned immediately. This is the only operation allowed to abort a run.
pub async fn csv_text(client: &Client, url: &str) -> Result<String> {
    let mut attempt = 0;

    loop {
        attempt += 1;

        match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => return Ok(body),
                Err(_) if attempt < MAX_RETRIES => {
                    warn!(url, attempt, "body read failed, retrying");
                    sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e.into()),
            },
            Ok(resp) => return Err(anyhow::anyhow!("HTTP error: {}", resp.status())),
            Err(_) if attempt < MAX_RETRIES => {
                warn!(url, attempt, "request failed, retrying");
                sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
