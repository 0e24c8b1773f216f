use crate::error::FetchError;
use crate::pathfinding::PageId;
use std::future::Future;

/// Turns a page into the ordered list of pages it links to.
///
/// Implementations own transport, parsing and title normalization. The
/// engines call `fetch_neighbors` at most once per page per search (once per
/// depth attempt for iterative deepening) and treat an error as a dead end.
pub trait LinkSource: Send + Sync {
    fn fetch_neighbors(
        &self,
        page: &str,
    ) -> impl Future<Output = Result<Vec<PageId>, FetchError>> + Send;

    /// Canonical spelling of a user-supplied page, applied to start and end
    /// before a search begins.
    fn canonical_page(&self, page: &str) -> PageId {
        page.to_string()
    }
}
