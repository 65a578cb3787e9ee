use crate::core::gate::ConcurrencyGate;
use crate::domain::model::Item;
use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

/// Fetches single items from the HN API.
///
/// A fetch never fails the caller: every transport, status, or decode
/// problem is logged and collapsed into `None`. There are no retries.
#[derive(Debug, Clone)]
pub struct ItemFetcher {
    client: Client,
    base_url: String,
    delay: Duration,
}

impl ItemFetcher {
    pub fn new(base_url: &str, delay: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            delay,
        }
    }

    /// Fetch one item, holding a gate slot for the duration of the call.
    ///
    /// The optional delay runs after a successful fetch and before the slot
    /// is released, which paces the aggregate request rate on top of the
    /// concurrency cap.
    pub async fn fetch(&self, id: u64, gate: &ConcurrencyGate) -> Option<Item> {
        let _slot = gate.acquire().await;
        tracing::debug!("fetching item {}", id);

        match self.request(id).await {
            Ok(item) => {
                tracing::debug!("successfully fetched item {}", id);
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                Some(item)
            }
            Err(ScrapeError::HttpStatusError { status, .. }) => {
                tracing::warn!("failed to fetch item {}: HTTP {}", id, status);
                None
            }
            Err(e) => {
                tracing::error!("error fetching item {}: {}", id, e);
                None
            }
        }
    }

    async fn request(&self, id: u64) -> Result<Item> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatusError { id, status });
        }

        let item = response.json::<Item>().await?;
        Ok(item)
    }
}
