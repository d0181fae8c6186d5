//! Errors raised while building or editing a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::{Point, Range};

/// Errors that can occur when configuring or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no cells (zero or negative width or height).
    EmptyGrid { cols: i32, rows: i32 },
    /// A coordinate lies outside the grid bounds.
    InvalidCoordinate { pos: Point, bounds: Range },
    /// A wall was requested on the start or end cell.
    RoleConflict(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { cols, rows } => {
                write!(f, "grid: empty dimensions {cols}x{rows}")
            }
            Self::InvalidCoordinate { pos, bounds } => {
                write!(f, "grid: coordinate {pos} outside bounds {bounds}")
            }
            Self::RoleConflict(pos) => {
                write!(f, "grid: cannot place a wall on start/end cell {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
