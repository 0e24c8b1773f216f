use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wikirace_core::{FetchError, LinkSource, PageId, SearchConfig, Solver};

/// In-memory link graph that records every fetch it serves.
#[derive(Default)]
pub struct TestGraph {
    links: FxHashMap<PageId, Vec<PageId>>,
    failing: FxHashSet<PageId>,
    fetch_delay: Option<Duration>,
    fetches: Mutex<Vec<PageId>>,
}

impl TestGraph {
    pub fn new(edges: &[(&str, &[&str])]) -> Self {
        let links = edges
            .iter()
            .map(|(page, neighbors)| {
                (
                    page.to_string(),
                    neighbors.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect();

        Self {
            links,
            ..Self::default()
        }
    }

    pub fn with_failing(mut self, pages: &[&str]) -> Self {
        self.failing = pages.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub fn neighbors(&self, page: &str) -> &[PageId] {
        self.links.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fetches(&self) -> Vec<PageId> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn fetch_count(&self, page: &str) -> usize {
        self.fetches().iter().filter(|p| p.as_str() == page).count()
    }

    /// Panics unless every consecutive pair of `path` is a link in the graph.
    pub fn assert_valid_walk(&self, path: &[PageId]) {
        for step in path.windows(2) {
            assert!(
                self.neighbors(&step[0]).contains(&step[1]),
                "{} does not link to {}",
                step[0],
                step[1]
            );
        }
    }
}

impl LinkSource for TestGraph {
    async fn fetch_neighbors(&self, page: &str) -> Result<Vec<PageId>, FetchError> {
        self.fetches.lock().unwrap().push(page.to_string());

        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(page) {
            return Err(FetchError::unavailable(page, "scripted failure"));
        }

        Ok(self.neighbors(page).to_vec())
    }
}

/// Link source whose fetches never complete.
pub struct HangingLinks;

impl LinkSource for HangingLinks {
    async fn fetch_neighbors(&self, _page: &str) -> Result<Vec<PageId>, FetchError> {
        std::future::pending().await
    }
}

pub fn solver<S: LinkSource + 'static>(links: S, config: SearchConfig) -> (Solver<S>, Arc<S>) {
    let links = Arc::new(links);
    (Solver::new(Arc::clone(&links), config), links)
}

/// Path of strings from a slice of literals
pub fn path(pages: &[&str]) -> Vec<PageId> {
    pages.iter().map(|p| p.to_string()).collect()
}

/// A -> B -> C
pub fn chain_graph() -> TestGraph {
    TestGraph::new(&[("A", &["B"]), ("B", &["C"])])
}

/// Two shortest routes from A to F, B's is listed first
pub fn diamond_graph() -> TestGraph {
    TestGraph::new(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["E"]),
        ("D", &["F"]),
        ("E", &["F"]),
    ])
}

/// A and B link to each other, Z is unreachable
pub fn closed_graph() -> TestGraph {
    TestGraph::new(&[("A", &["B"]), ("B", &["A"]), ("Z", &[])])
}
