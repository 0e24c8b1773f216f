use crate::fixtures::{TestGraph, chain_graph, path, solver};
use wikirace_core::{Algorithm, LinkSource, PageId, SearchConfig, SearchError, SearchOutcome};

#[tokio::test]
async fn test_same_start_and_end_skips_fetching() {
    for algorithm in ["bfs", "ids"] {
        let (solver, graph) = solver(chain_graph(), SearchConfig::default());

        let result = solver.solve("A", "A", algorithm).await.unwrap();

        assert_eq!(result.outcome, SearchOutcome::Found);
        assert_eq!(result.path, Some(path(&["A"])));
        assert_eq!(result.nodes_explored, 0);
        assert_eq!(result.path_length, 0);
        assert!(graph.fetches().is_empty());
    }
}

#[tokio::test]
async fn test_empty_pages_are_rejected() {
    let (solver, graph) = solver(chain_graph(), SearchConfig::default());

    let missing_start = solver.solve("", "C", "bfs").await.unwrap_err();
    let missing_end = solver.solve("A", "   ", "ids").await.unwrap_err();

    assert!(matches!(missing_start, SearchError::MissingPage { field: "start" }));
    assert!(matches!(missing_end, SearchError::MissingPage { field: "end" }));
    assert!(missing_start.is_invalid_input());
    assert!(graph.fetches().is_empty());
}

#[tokio::test]
async fn test_unknown_algorithm_is_rejected() {
    let (solver, graph) = solver(chain_graph(), SearchConfig::default());

    let error = solver.solve("A", "C", "dfs").await.unwrap_err();

    assert!(matches!(error, SearchError::UnknownAlgorithm(ref name) if name == "dfs"));
    assert!(error.is_invalid_input());
    assert!(graph.fetches().is_empty());
}

#[tokio::test]
async fn test_algorithm_selector_is_case_insensitive() {
    let (solver, _graph) = solver(chain_graph(), SearchConfig::default());

    let result = solver.solve("A", "C", "IDS").await.unwrap();

    assert_eq!(result.algorithm, Algorithm::Ids);
    assert_eq!(result.path, Some(path(&["A", "B", "C"])));
}

#[tokio::test]
async fn test_both_algorithms_agree_on_chain() {
    let (solver, graph) = solver(chain_graph(), SearchConfig::default());

    let bfs = solver.solve("A", "C", "bfs").await.unwrap();
    let ids = solver.solve("A", "C", "ids").await.unwrap();

    assert_eq!(bfs.path, ids.path);
    assert_eq!(bfs.path_length, ids.path_length);
    graph.assert_valid_walk(bfs.path.as_ref().unwrap());
}

#[tokio::test]
async fn test_repeated_searches_do_not_share_state() {
    let (solver, _graph) = solver(
        TestGraph::new(&[("A", &["B"]), ("B", &["C"]), ("X", &["B"])]),
        SearchConfig::default(),
    );

    let from_a = solver.solve("A", "C", "bfs").await.unwrap();
    let from_x = solver.solve("X", "C", "bfs").await.unwrap();

    // A stale ledger would have walked B back to A
    assert_eq!(from_a.path, Some(path(&["A", "B", "C"])));
    assert_eq!(from_x.path, Some(path(&["X", "B", "C"])));
}

/// Link source whose titles are case-insensitive
struct LowercaseLinks(TestGraph);

impl LinkSource for LowercaseLinks {
    async fn fetch_neighbors(
        &self,
        page: &str,
    ) -> Result<Vec<PageId>, wikirace_core::FetchError> {
        self.0.fetch_neighbors(page).await
    }

    fn canonical_page(&self, page: &str) -> PageId {
        page.to_lowercase()
    }
}

#[tokio::test]
async fn test_link_source_normalizes_start_and_end() {
    let graph = TestGraph::new(&[("a", &["b"]), ("b", &["c"])]);
    let (solver, _links) = solver(LowercaseLinks(graph), SearchConfig::default());

    let result = solver.solve("A", "C", "bfs").await.unwrap();

    assert_eq!(result.path, Some(path(&["a", "b", "c"])));
}
