use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;

use crate::error::{OpshubError, Result};

/// Published sheets sit behind aggressive intermediary caching, so every
/// GET carries a throwaway query parameter plus no-store; the board must
/// reflect the latest publish, not a cached export.
pub struct SheetClient {
    http: Client,
}

impl SheetClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { http })
    }

    /// One GET, raw text out. Non-success statuses are an error the CLI
    /// reports once; there is no retry here.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let busted = cache_bust(url, now_millis());
        tracing::debug!(url = %busted, "fetching tab");
        let response = self.http.get(&busted).header(CACHE_CONTROL, "no-store").send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OpshubError::FetchStatus(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn cache_bust(url: &str, stamp: u128) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}cachebust={stamp}")
}
