//! The [`Cell`] type: role flags plus the fields a search run writes.

use crate::geom::Point;

/// A single grid cell.
///
/// `is_start`, `is_end` and `is_wall` describe the layout and only change
/// when the grid is rebuilt or a wall is toggled. The remaining fields are
/// search-transient: they are written by search runs and cleared on reset.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    /// Set once the cell has been expanded (or, for BFS, enqueued).
    pub visited: bool,
    pub part_of_path: bool,
    /// Coordinate of the cell this one was discovered from.
    pub parent: Option<Point>,
    /// Ranking score; only meaningful for scored strategies.
    pub score: f64,
}

/// What a renderer should show for a cell, highest priority first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Path,
    Start,
    End,
    Wall,
    Visited,
    Empty,
}

impl Cell {
    /// A fresh, unflagged cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            is_start: false,
            is_end: false,
            is_wall: false,
            visited: false,
            part_of_path: false,
            parent: None,
            score: 0.0,
        }
    }

    /// Whether the cell is the start or the end.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }

    /// Clear every search-transient field, keeping the layout flags.
    #[inline]
    pub fn clear_search(&mut self) {
        self.visited = false;
        self.part_of_path = false;
        self.parent = None;
        self.score = 0.0;
    }

    /// Display precedence: path, start, end, wall, visited, empty.
    pub const fn display_kind(&self) -> CellKind {
        if self.part_of_path {
            CellKind::Path
        } else if self.is_start {
            CellKind::Start
        } else if self.is_end {
            CellKind::End
        } else if self.is_wall {
            CellKind::Wall
        } else if self.visited {
            CellKind::Visited
        } else {
            CellKind::Empty
        }
    }
}
