use crate::cache::CachedLinkSource;
use crate::config::ServerConfig;
use crate::wikipedia::WikipediaClient;
use std::sync::Arc;
use tracing::info;
use wikirace_core::{LinkSource, SearchConfig, Solver};

pub struct AppState<S> {
    pub solver: Solver<S>,
}

pub type WikipediaState = AppState<CachedLinkSource<WikipediaClient>>;

impl<S: LinkSource + 'static> AppState<S> {
    pub fn new(links: S, config: SearchConfig) -> Self {
        Self {
            solver: Solver::new(Arc::new(links), config),
        }
    }
}

impl WikipediaState {
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = WikipediaClient::new(&config.wikipedia_base_url, config.fetch_timeout)?;
        let links = CachedLinkSource::new(client, config.cache_capacity, config.cache_ttl);

        info!(
            base_url = %config.wikipedia_base_url,
            workers = config.search.workers,
            max_depth = config.search.max_depth,
            time_budget_secs = config.search.time_budget.as_secs(),
            "Search engine configured"
        );

        Ok(Self::new(links, config.search.clone()))
    }
}
