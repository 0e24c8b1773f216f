use super::frontier::Frontier;
use crate::link_source::LinkSource;
use crate::pathfinding::PageId;
use crate::pathfinding::ledger::DiscoveryLedger;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Everything the workers of one breadth-first search share.
pub struct BfsState {
    pub frontier: Frontier,
    pub ledger: DiscoveryLedger,
    goal: PageId,
    nodes_explored: Arc<AtomicUsize>,
}

pub enum WorkerExit {
    ReachedGoal,
    Drained,
}

impl BfsState {
    pub fn new(
        start: &str,
        goal: &str,
        frontier: Frontier,
        nodes_explored: Arc<AtomicUsize>,
    ) -> Self {
        let ledger = DiscoveryLedger::new();
        ledger.mark_seen(start);
        frontier.seed(start.to_string());

        Self {
            frontier,
            ledger,
            goal: goal.to_string(),
            nodes_explored,
        }
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    fn visit_neighbor(&self, neighbor: &str, current_page: &str) -> bool {
        self.ledger.discover(neighbor, current_page)
    }
}

pub async fn run_worker<S: LinkSource>(links: Arc<S>, state: Arc<BfsState>) -> WorkerExit {
    while let Some(current_page) = state.frontier.next().await {
        if current_page == state.goal {
            state.frontier.close();
            return WorkerExit::ReachedGoal;
        }

        state.nodes_explored.fetch_add(1, Ordering::Relaxed);

        let discovered = match links.fetch_neighbors(&current_page).await {
            Ok(neighbors) => {
                debug!(page = %current_page, links = neighbors.len(), "Fetched links");
                neighbors
                    .into_iter()
                    .filter(|neighbor| state.visit_neighbor(neighbor, &current_page))
                    .collect()
            }
            Err(error) => {
                warn!(page = %current_page, error = %error, "Failed to fetch links, skipping page");
                Vec::new()
            }
        };

        state.frontier.complete(discovered).await;
    }

    WorkerExit::Drained
}
