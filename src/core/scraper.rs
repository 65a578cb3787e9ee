use crate::core::fetcher::ItemFetcher;
use crate::core::gate::ConcurrencyGate;
use crate::core::{BatchResult, ConfigProvider, Storage};
use crate::utils::error::{Result, ScrapeError};
use std::time::Instant;
use tokio::task::JoinSet;

/// Drives a scrape run: resolve the thread's children, fan out bounded
/// concurrent fetches, and hand the aggregate to storage.
pub struct ThreadScraper<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: ItemFetcher,
}

impl<S: Storage, C: ConfigProvider> ThreadScraper<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = ItemFetcher::new(config.api_base(), config.request_delay());
        Self {
            storage,
            config,
            fetcher,
        }
    }

    /// Fetch the thread root and return its direct child IDs.
    ///
    /// This is the one fetch whose failure is fatal: without the root there
    /// is nothing to scrape.
    pub async fn fetch_root(&self, thread_id: u64) -> Result<Vec<u64>> {
        tracing::info!("fetching thread {} to get child comments", thread_id);

        // Single unthrottled request; the capacity-1 gate is trivially free.
        let gate = ConcurrencyGate::new(1);
        let root = self
            .fetcher
            .fetch(thread_id, &gate)
            .await
            .ok_or(ScrapeError::RootFetchError { id: thread_id })?;

        let kids = root.kids();
        tracing::info!(
            "found {} top-level comments in thread {}",
            kids.len(),
            thread_id
        );
        Ok(kids)
    }

    /// Fetch every ID with at most `max_concurrent` requests in flight.
    ///
    /// Individual failures never abort the batch; the result carries the
    /// surviving items in completion order plus the requested/fetched counts.
    pub async fn fetch_batch(&self, ids: &[u64]) -> BatchResult {
        let requested = ids.len();
        if requested == 0 {
            return BatchResult::empty();
        }

        tracing::info!(
            "starting to fetch {} comments with max concurrency of {}",
            requested,
            self.config.max_concurrent()
        );

        let gate = ConcurrencyGate::new(self.config.max_concurrent());
        let mut tasks = JoinSet::new();
        for &id in ids {
            let fetcher = self.fetcher.clone();
            let gate = gate.clone();
            tasks.spawn(async move { fetcher.fetch(id, &gate).await });
        }

        let mut items = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(item)) => items.push(item),
                Ok(None) => {}
                Err(e) => tracing::error!("fetch task failed to complete: {}", e),
            }
        }

        let fetched = items.len();
        tracing::info!("successfully fetched {} out of {} comments", fetched, requested);
        BatchResult {
            items,
            requested,
            fetched,
        }
    }

    /// Full run: root, optional truncation, batch fetch, JSON output.
    /// Returns the output path on success.
    pub async fn run(&self, thread_id: u64) -> Result<String> {
        let started = Instant::now();

        let mut kids = self.fetch_root(thread_id).await?;
        if let Some(limit) = self.config.limit() {
            if kids.len() > limit {
                tracing::info!("limiting to first {} comments", limit);
                kids.truncate(limit);
            }
        }

        let result = self.fetch_batch(&kids).await;

        tracing::info!(
            "scraping complete in {:.2} seconds",
            started.elapsed().as_secs_f64()
        );
        tracing::info!("success rate: {}/{}", result.fetched, result.requested);

        let output_path = self.config.output_path();
        tracing::info!("saving results to {}", output_path);
        let json = serde_json::to_string_pretty(&result.items)?;
        self.storage.write_file(output_path, json.as_bytes()).await?;

        Ok(output_path.to_string())
    }
}
