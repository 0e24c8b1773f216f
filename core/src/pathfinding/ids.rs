use super::ledger::DiscoveryLedger;
use super::utils::{PageId, reconstruct_path};
use crate::error::SearchError;
use crate::link_source::LinkSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec;
use tracing::{debug, warn};

/// Iterative-deepening depth-first search with ceilings `1..=max_depth`.
///
/// Each ceiling starts from a fresh ledger. A path of `k` links is found at
/// ceiling `k`; among paths of that length the first one in link order wins.
pub async fn ids_find_path<S: LinkSource>(
    start: &str,
    goal: &str,
    links: &S,
    max_depth: usize,
    nodes_explored: &AtomicUsize,
) -> Result<Option<Vec<PageId>>, SearchError> {
    for depth_ceiling in 1..=max_depth {
        debug!(depth_ceiling, "Starting depth-limited search");

        let ledger = DiscoveryLedger::new();
        let search = DepthLimitedSearch {
            goal,
            links,
            ledger: &ledger,
            nodes_explored,
        };

        if search.run(start, depth_ceiling).await {
            return reconstruct_path(&ledger, goal).map(Some);
        }
    }

    Ok(None)
}

struct DepthLimitedSearch<'a, S> {
    goal: &'a str,
    links: &'a S,
    ledger: &'a DiscoveryLedger,
    nodes_explored: &'a AtomicUsize,
}

struct Frame {
    page: PageId,
    remaining_depth: usize,
    neighbors: vec::IntoIter<PageId>,
}

enum Visit {
    Goal,
    DeadEnd,
    Expand(Frame),
}

impl<S: LinkSource> DepthLimitedSearch<'_, S> {
    /// Depth-first traversal on an explicit stack; never deeper than
    /// `depth_ceiling` frames.
    async fn run(&self, start: &str, depth_ceiling: usize) -> bool {
        let mut stack = Vec::with_capacity(depth_ceiling + 1);

        match self.visit(start.to_string(), depth_ceiling).await {
            Visit::Goal => return true,
            Visit::DeadEnd => return false,
            Visit::Expand(frame) => stack.push(frame),
        }

        while let Some(frame) = stack.last_mut() {
            let Some(next_page) = frame.neighbors.find(|n| !self.ledger.is_seen(n)) else {
                stack.pop();
                continue;
            };
            self.ledger.record_predecessor(&next_page, &frame.page);
            let remaining_depth = frame.remaining_depth - 1;

            match self.visit(next_page, remaining_depth).await {
                Visit::Goal => return true,
                Visit::DeadEnd => {}
                Visit::Expand(child) => stack.push(child),
            }
        }

        false
    }

    async fn visit(&self, page: PageId, remaining_depth: usize) -> Visit {
        self.nodes_explored.fetch_add(1, Ordering::Relaxed);
        self.ledger.mark_seen(&page);

        if page == self.goal {
            return Visit::Goal;
        }
        if remaining_depth == 0 {
            return Visit::DeadEnd;
        }

        match self.links.fetch_neighbors(&page).await {
            Ok(neighbors) => Visit::Expand(Frame {
                page,
                remaining_depth,
                neighbors: neighbors.into_iter(),
            }),
            Err(error) => {
                warn!(page = %page, error = %error, "Failed to fetch links, treating as dead end");
                Visit::DeadEnd
            }
        }
    }
}
