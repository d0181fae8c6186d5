use std::fmt;

use gridwalk_core::GridError;

/// Errors returned by [`SearchContext`](crate::SearchContext).
///
/// Unreachable goals and empty frontiers are not errors; they surface as
/// [`RunState::Exhausted`](crate::RunState::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid rejected a coordinate or layout.
    Grid(GridError),
    /// `step` was called with no strategy launched.
    EngineNotRunning,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::EngineNotRunning => f.write_str("search: step called before launch"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::EngineNotRunning => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
