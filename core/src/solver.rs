use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::link_source::LinkSource;
use crate::pathfinding::{PageId, SearchOutcome, SearchResult, bfs_find_path, ids_find_path};
use crate::search_config::SearchConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{info, warn};

/// Entry point for path searches over a [`LinkSource`].
///
/// Every call builds its own ledger and frontier; the solver only holds the
/// link source and configuration, so it can serve concurrent requests.
pub struct Solver<S> {
    links: Arc<S>,
    config: SearchConfig,
}

impl<S: LinkSource + 'static> Solver<S> {
    pub fn new(links: Arc<S>, config: SearchConfig) -> Self {
        Self { links, config }
    }

    pub fn links(&self) -> &Arc<S> {
        &self.links
    }

    /// Validates the raw request values and runs the search.
    pub async fn solve(
        &self,
        start: &str,
        end: &str,
        algorithm: &str,
    ) -> Result<SearchResult, SearchError> {
        let algorithm: Algorithm = algorithm.parse()?;

        self.find_path(start, end, algorithm).await
    }

    pub async fn find_path(
        &self,
        start: &str,
        end: &str,
        algorithm: Algorithm,
    ) -> Result<SearchResult, SearchError> {
        let start = self.links.canonical_page(require_page("start", start)?);
        let end = self.links.canonical_page(require_page("end", end)?);
        let search_timer = Instant::now();

        info!(start = %start, end = %end, algorithm = %algorithm, "Starting search");

        if start == end {
            return Ok(SearchResult::new(
                Some(vec![start]),
                SearchOutcome::Found,
                0,
                search_timer.elapsed(),
                algorithm,
            ));
        }

        let nodes_explored = Arc::new(AtomicUsize::new(0));
        let search = self.run_algorithm(&start, &end, algorithm, Arc::clone(&nodes_explored));

        let (path, outcome) = match tokio::time::timeout(self.config.time_budget, search).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    start = %start,
                    end = %end,
                    budget_secs = self.config.time_budget.as_secs_f64(),
                    "Search timed out"
                );
                (None, SearchOutcome::TimedOut)
            }
        };

        let result = SearchResult::new(
            path,
            outcome,
            nodes_explored.load(Ordering::Relaxed),
            search_timer.elapsed(),
            algorithm,
        );

        info!(
            outcome = ?result.outcome,
            nodes_explored = result.nodes_explored,
            path_length = result.path_length,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Search finished"
        );

        Ok(result)
    }

    async fn run_algorithm(
        &self,
        start: &str,
        end: &str,
        algorithm: Algorithm,
        nodes_explored: Arc<AtomicUsize>,
    ) -> Result<(Option<Vec<PageId>>, SearchOutcome), SearchError> {
        match algorithm {
            Algorithm::Bfs => {
                let path = bfs_find_path(
                    start,
                    end,
                    Arc::clone(&self.links),
                    &self.config,
                    nodes_explored,
                )
                .await?;
                let outcome = if path.is_some() {
                    SearchOutcome::Found
                } else {
                    SearchOutcome::Exhausted
                };
                Ok((path, outcome))
            }
            Algorithm::Ids => {
                let path = ids_find_path(
                    start,
                    end,
                    self.links.as_ref(),
                    self.config.max_depth,
                    &nodes_explored,
                )
                .await?;
                let outcome = if path.is_some() {
                    SearchOutcome::Found
                } else {
                    SearchOutcome::DepthExceeded
                };
                Ok((path, outcome))
            }
        }
    }
}

fn require_page<'a>(field: &'static str, page: &'a str) -> Result<&'a str, SearchError> {
    if page.trim().is_empty() {
        return Err(SearchError::MissingPage { field });
    }
    Ok(page)
}
