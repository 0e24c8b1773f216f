pub mod frontier;
mod state;

use super::utils::{PageId, reconstruct_path};
use crate::error::SearchError;
use crate::link_source::LinkSource;
use crate::search_config::SearchConfig;
use frontier::Frontier;
use state::{BfsState, WorkerExit, run_worker};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::task::JoinSet;
use tracing::debug;

/// Concurrent breadth-first search from `start` to `goal`.
///
/// Returns `Ok(None)` once the frontier is exhausted. Dropping the returned
/// future (for example on timeout) aborts every worker along with its
/// in-flight fetch.
pub async fn bfs_find_path<S: LinkSource + 'static>(
    start: &str,
    goal: &str,
    links: Arc<S>,
    config: &SearchConfig,
    nodes_explored: Arc<AtomicUsize>,
) -> Result<Option<Vec<PageId>>, SearchError> {
    let workers = config.workers.max(1);
    let frontier = Frontier::new(config.frontier_capacity, workers);
    let bfs_state = Arc::new(BfsState::new(start, goal, frontier, nodes_explored));

    let mut pool = JoinSet::new();
    for _ in 0..workers {
        pool.spawn(run_worker(Arc::clone(&links), Arc::clone(&bfs_state)));
    }
    debug!(workers, "Breadth-first worker pool started");

    while let Some(joined) = pool.join_next().await {
        match joined {
            Ok(WorkerExit::ReachedGoal) => {
                pool.abort_all();
                return reconstruct_path(&bfs_state.ledger, bfs_state.goal()).map(Some);
            }
            Ok(WorkerExit::Drained) => {}
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(_) => {}
        }
    }

    Ok(None)
}
