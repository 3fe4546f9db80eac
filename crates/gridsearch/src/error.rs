use std::fmt;

use gridsearch_core::Cell;

/// Which end of a search a precondition error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Inputs that violate the search preconditions.
///
/// An unreachable goal is not an error; it is reported through
/// [`Outcome::NoRoute`](crate::Outcome::NoRoute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has a non-positive dimension.
    EmptyGrid { rows: i32, cols: i32 },
    /// An endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, cell: Cell },
    /// An endpoint is an obstacle.
    Blocked { endpoint: Endpoint, cell: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "search: grid must be non-empty, got {rows}x{cols}")
            }
            Self::OutOfBounds { endpoint, cell } => {
                write!(f, "search: {endpoint} {cell} is out of bounds")
            }
            Self::Blocked { endpoint, cell } => {
                write!(f, "search: {endpoint} {cell} is an obstacle")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub(crate) String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search algorithm \u{201c}{}\u{201d}, choose from: bfs, dfs, ucs, ids, a*, random, greedy_bfs",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}
