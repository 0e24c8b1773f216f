use std::time::Duration;

/// Configuration for the search engines
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Concurrent breadth-first workers
    pub workers: usize,
    /// Soft bound on queued breadth-first pages before workers wait for space
    pub frontier_capacity: usize,
    /// Wall-clock ceiling for one search, either algorithm
    pub time_budget: Duration,
    /// Deepest ceiling iterative deepening will try
    pub max_depth: usize,
}

impl SearchConfig {
    pub fn new(
        workers: usize,
        frontier_capacity: usize,
        time_budget: Duration,
        max_depth: usize,
    ) -> Self {
        Self {
            workers: workers.max(1),
            frontier_capacity: frontier_capacity.max(1),
            time_budget,
            max_depth: max_depth.max(1),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: 200,
            frontier_capacity: 100_000,
            time_budget: Duration::from_secs(5 * 60),
            max_depth: 6,
        }
    }
}
