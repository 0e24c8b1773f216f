//! Error types for the search engine.
//!
//! `SearchError` is what a caller of [`crate::Solver`] can see. `FetchError`
//! stays local to one page: the engines log it and carry on.

use thiserror::Error;

use crate::pathfinding::PageId;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A start or end page was empty
    #[error("both start and end pages are required (missing {field})")]
    MissingPage { field: &'static str },

    /// Algorithm selector other than `bfs` or `ids`
    #[error("unknown search algorithm '{0}', valid search algorithms are bfs and ids")]
    UnknownAlgorithm(String),

    /// The predecessor chain ending at `page` is cyclic or incomplete
    #[error("discovery ledger holds no valid path to '{page}'")]
    BrokenPath { page: PageId },
}

impl SearchError {
    /// Whether the error was caused by the request rather than the engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SearchError::MissingPage { .. } | SearchError::UnknownAlgorithm(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure while talking to the link source
    #[error("request for '{page}' failed: {source}")]
    Request {
        page: PageId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The page answered with a non-success status
    #[error("'{page}' returned HTTP {status}")]
    Status { page: PageId, status: u16 },

    /// Anything else that leaves the page without links
    #[error("'{page}' is unavailable: {reason}")]
    Unavailable { page: PageId, reason: String },
}

impl FetchError {
    pub fn request(
        page: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        FetchError::Request {
            page: page.to_string(),
            source: source.into(),
        }
    }

    pub fn unavailable(page: &str, reason: impl Into<String>) -> Self {
        FetchError::Unavailable {
            page: page.to_string(),
            reason: reason.into(),
        }
    }
}
