pub mod algorithm;
pub mod error;
pub mod link_source;
pub mod pathfinding;
pub mod search_config;
pub mod solver;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::{FetchError, SearchError};
pub use link_source::LinkSource;
pub use pathfinding::bfs::frontier::Frontier;
pub use pathfinding::{
    DiscoveryLedger, PageId, SearchOutcome, SearchResult, bfs_find_path, ids_find_path,
    reconstruct_path,
};
pub use search_config::SearchConfig;
pub use solver::Solver;
