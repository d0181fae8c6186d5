//! [`GridConfig`]: the layout a [`Grid`](crate::Grid) is built from.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Default number of columns and rows.
pub const DEFAULT_SIZE: i32 = 40;
/// Default canvas edge in pixels; cells are `DEFAULT_CANVAS / DEFAULT_SIZE` wide.
pub const DEFAULT_CANVAS: f64 = 1000.0;

/// Grid dimensions, endpoint positions, obstacles and pixel cell size.
///
/// The pixel size only feeds the heuristic; it has no effect on the grid
/// shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
    pub start: Point,
    pub end: Point,
    pub walls: Vec<Point>,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridConfig {
    /// A wall-free layout of `cols` x `rows` cells.
    pub fn open(cols: i32, rows: i32, start: Point, end: Point) -> Self {
        Self {
            cols,
            rows,
            start,
            end,
            walls: Vec::new(),
            cell_width: DEFAULT_CANVAS / DEFAULT_SIZE as f64,
            cell_height: DEFAULT_CANVAS / DEFAULT_SIZE as f64,
        }
    }

    /// Replace the wall set (builder).
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Point>) -> Self {
        self.walls = walls.into_iter().collect();
        self
    }

    /// Set the pixel size of a cell (builder).
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// The grid rectangle `[0, cols) x [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::from_size(self.cols, self.rows)
    }

    /// Check dimensions and that every coordinate is in bounds and no wall
    /// sits on an endpoint.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.cols <= 0 || self.rows <= 0 {
            return Err(GridError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        let bounds = self.bounds();
        let check = |pos: Point| {
            if bounds.contains(pos) {
                Ok(())
            } else {
                Err(GridError::InvalidCoordinate { pos, bounds })
            }
        };
        check(self.start)?;
        check(self.end)?;
        for &w in &self.walls {
            check(w)?;
            if w == self.start || w == self.end {
                return Err(GridError::RoleConflict(w));
            }
        }
        Ok(())
    }
}

impl Default for GridConfig {
    /// The showcase layout: a 40x40 grid with a tall wall between start and
    /// end and two horizontal bars forming an open-ended bracket.
    fn default() -> Self {
        let n = DEFAULT_SIZE;
        let middle = n / 2;
        let mut walls = Vec::new();
        for j in 2..n - 2 {
            walls.push(Point::new(25, j));
        }
        for i in 15..25 {
            walls.push(Point::new(i, 2));
            walls.push(Point::new(i, n - 3));
        }
        Self::open(n, n, Point::new(7, middle), Point::new(n - 5, middle)).with_walls(walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        let cfg = GridConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.start, Point::new(7, 20));
        assert_eq!(cfg.end, Point::new(35, 20));
        assert_eq!(cfg.cell_width, 25.0);
        // 36 column cells plus two bars of 10.
        assert_eq!(cfg.walls.len(), 36 + 20);
        assert!(cfg.walls.contains(&Point::new(25, 20)));
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        let cfg = GridConfig::open(5, 5, Point::new(0, 0), Point::new(5, 0));
        assert_eq!(
            cfg.validate(),
            Err(GridError::InvalidCoordinate {
                pos: Point::new(5, 0),
                bounds: Range::from_size(5, 5),
            })
        );
        let cfg = GridConfig::open(5, 5, Point::new(0, 0), Point::new(4, 4))
            .with_walls([Point::new(-1, 2)]);
        assert!(matches!(
            cfg.validate(),
            Err(GridError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn validate_rejects_wall_on_endpoint() {
        let cfg = GridConfig::open(5, 5, Point::new(0, 0), Point::new(4, 4))
            .with_walls([Point::new(4, 4)]);
        assert_eq!(cfg.validate(), Err(GridError::RoleConflict(Point::new(4, 4))));
    }

    #[test]
    fn validate_rejects_empty_grid() {
        let cfg = GridConfig::open(0, 3, Point::new(0, 0), Point::new(0, 0));
        assert_eq!(cfg.validate(), Err(GridError::EmptyGrid { cols: 0, rows: 3 }));
    }
}
