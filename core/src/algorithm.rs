use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Concurrent breadth-first search
    Bfs,
    /// Sequential iterative-deepening depth-first search
    Ids,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Ids => "ids",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "ids" => Ok(Algorithm::Ids),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
