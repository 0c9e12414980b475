//! Error kinds shared by the MI engine, path ranker and seed-bounded expander.
//!
//! Per the error handling design, there are exactly two recoverable error
//! kinds. Every other numeric edge case (NaN, division by zero, missing
//! extractor output) is handled internally by epsilon-smoothing and never
//! surfaces as an error.
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A query referenced a node id that is not present in the graph, or an
    /// expander call was given an empty seed set.
    InvalidInput(String),
    /// Raised only when the host supplies a cancellation signal and it fires
    /// between BFS layers, DFS extensions or expander rounds.
    Cancelled,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput(message) => write!(f, "invalid input: {}", message),
            CoreError::Cancelled => write!(f, "operation was cancelled"),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn missing_node(id: impl fmt::Display) -> Self {
        CoreError::InvalidInput(format!("node `{}` is not present in the graph", id))
    }

    pub fn empty_seed_set() -> Self {
        CoreError::InvalidInput("the seed set must contain at least one node".to_string())
    }
}

/// Result type returned by every fallible operation in the core.
pub type Result<T> = std::result::Result<T, CoreError>;
