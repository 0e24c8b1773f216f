pub mod bfs;
pub mod ids;
pub mod ledger;
pub mod utils;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use ids::ids_find_path;
pub use ledger::DiscoveryLedger;
pub use utils::{
    NO_SOLUTION, NO_SOLUTION_WITHIN_DEPTH, PageId, SearchOutcome, SearchResult, reconstruct_path,
};
