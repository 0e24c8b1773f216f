use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;
use wikirace_core::{FetchError, LinkSource, PageId};

/// Keeps recently fetched link lists in memory so repeated visits (every
/// iterative-deepening ceiling revisits the shallow pages) skip the network.
/// Failures are never cached.
pub struct CachedLinkSource<S> {
    inner: S,
    cache: Cache<PageId, Arc<Vec<PageId>>>,
}

impl<S: LinkSource> CachedLinkSource<S> {
    pub fn new(inner: S, max_capacity: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(time_to_live)
            .build();

        Self { inner, cache }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub async fn cached_pages(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl<S: LinkSource> LinkSource for CachedLinkSource<S> {
    async fn fetch_neighbors(&self, page: &str) -> Result<Vec<PageId>, FetchError> {
        // Check cache first
        if let Some(cached_links) = self.cache.get(page).await {
            trace!(page, "Link cache hit");
            return Ok(cached_links.as_ref().clone());
        }

        let links = self.inner.fetch_neighbors(page).await?;
        self.cache
            .insert(page.to_string(), Arc::new(links.clone()))
            .await;

        Ok(links)
    }

    fn canonical_page(&self, page: &str) -> PageId {
        self.inner.canonical_page(page)
    }
}
