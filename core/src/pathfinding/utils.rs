use super::ledger::DiscoveryLedger;
use crate::algorithm::Algorithm;
use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type PageId = String;

pub const NO_SOLUTION: &str = "No solution found";
pub const NO_SOLUTION_WITHIN_DEPTH: &str = "No solution found within max depth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found,
    /// Breadth-first frontier drained without reaching the goal
    Exhausted,
    /// Iterative deepening tried every ceiling up to the maximum
    DepthExceeded,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub path: Option<Vec<PageId>>,
    pub outcome: SearchOutcome,
    pub nodes_explored: usize,
    pub path_length: usize,
    pub elapsed: Duration,
    pub algorithm: Algorithm,
}

impl SearchResult {
    pub fn new(
        path: Option<Vec<PageId>>,
        outcome: SearchOutcome,
        nodes_explored: usize,
        elapsed: Duration,
        algorithm: Algorithm,
    ) -> Self {
        let path_length = path.as_ref().map_or(0, |p| p.len().saturating_sub(1));
        Self {
            path,
            outcome,
            nodes_explored,
            path_length,
            elapsed,
            algorithm,
        }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// The caller-facing message for an unsuccessful search.
    pub fn message(&self) -> Option<&'static str> {
        match self.outcome {
            SearchOutcome::Found => None,
            SearchOutcome::DepthExceeded => Some(NO_SOLUTION_WITHIN_DEPTH),
            SearchOutcome::Exhausted | SearchOutcome::TimedOut => Some(NO_SOLUTION),
        }
    }

    /// The path, or a single sentinel entry when there is none.
    pub fn solution(&self) -> Vec<String> {
        match (&self.path, self.message()) {
            (Some(path), _) => path.clone(),
            (None, Some(message)) => vec![message.to_string()],
            (None, None) => vec![NO_SOLUTION.to_string()],
        }
    }
}

/// Walks predecessors from `goal` back to the start, returning start..goal.
pub fn reconstruct_path(ledger: &DiscoveryLedger, goal: &str) -> Result<Vec<PageId>, SearchError> {
    let broken = || SearchError::BrokenPath {
        page: goal.to_string(),
    };

    if !ledger.is_seen(goal) {
        return Err(broken());
    }

    // A valid chain never visits more pages than were seen
    let max_steps = ledger.seen_count();
    let mut path = vec![goal.to_string()];
    let mut current_page = goal.to_string();

    while let Some(parent_page) = ledger.predecessor_of(&current_page) {
        if path.len() >= max_steps {
            return Err(broken());
        }
        path.push(parent_page.clone());
        current_page = parent_page;
    }

    path.reverse();
    Ok(path)
}
