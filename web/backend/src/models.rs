use serde::{Deserialize, Serialize};
use wikirace_core::{Algorithm, SearchOutcome, SearchResult};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct SolveForm {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default, alias = "algorithm")]
    pub algo: String,
}

#[derive(Serialize, Deserialize)]
pub struct SolveResponse {
    /// The path, or a one-element "no solution" message
    pub solution: Vec<String>,
    pub found: bool,
    pub outcome: SearchOutcome,
    pub algorithm: Algorithm,
    pub nodes_explored: usize,
    pub path_length: usize,
    pub elapsed_ms: u64,
    pub time_taken: String,
}

impl From<&SearchResult> for SolveResponse {
    fn from(result: &SearchResult) -> Self {
        Self {
            solution: result.solution(),
            found: result.is_found(),
            outcome: result.outcome,
            algorithm: result.algorithm,
            nodes_explored: result.nodes_explored,
            path_length: result.path_length,
            elapsed_ms: result.elapsed.as_millis() as u64,
            time_taken: format!("{:?}", result.elapsed),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
