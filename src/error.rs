//! Error types for the grid search toolkit

use std::fmt;

/// Errors surfaced while setting up a search.
///
/// Running out of frontier is not an error: strategies report it through
/// `SearchResult::found`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Grid dimensions, start or target are unusable
    InvalidConfiguration(String),
    /// Algorithm name did not match any strategy
    UnknownAlgorithm(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            SearchError::UnknownAlgorithm(name) => write!(
                f,
                "Unknown algorithm '{}' (expected bfs, dfs, ucs, dls, iddfs, bidirectional or all)",
                name
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Result type alias for grid search operations
pub type Result<T> = std::result::Result<T, SearchError>;
