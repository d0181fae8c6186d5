//! The [`Grid`] type, sole owner of every [`Cell`].
//!
//! Cells are stored row-major and addressed by [`Point`] (`x` = column,
//! `y` = row). Other components refer to cells only by coordinate.

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A fixed-size 2D grid of [`Cell`]s.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Allocate all cells and mark start, end and walls from `config`.
    pub fn build(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let bounds = config.bounds();
        let mut grid = Self {
            cells: bounds.iter().map(Cell::new).collect(),
            bounds,
            start: config.start,
            end: config.end,
        };
        for &w in &config.walls {
            grid.cell_mut(w)?.is_wall = true;
        }
        grid.cell_mut(config.start)?.is_start = true;
        grid.cell_mut(config.end)?.is_end = true;
        log::debug!(
            "grid: built {}x{} with {} walls, start {} end {}",
            config.cols,
            config.rows,
            config.walls.len(),
            config.start,
            config.end
        );
        Ok(grid)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells, `cols * rows`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Coordinate of the start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Coordinate of the end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.cols() as usize + p.x as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        match self.index(p) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::InvalidCoordinate {
                pos: p,
                bounds: self.bounds,
            }),
        }
    }

    /// Write the expandable neighbours of `p` into `buf`.
    ///
    /// Candidates are tried up, down, left, right; a neighbour is kept when
    /// it is in bounds, not a wall and not yet visited. `buf` is cleared
    /// first. Cells already pending in a frontier are *not* filtered out.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        for n in p.neighbors_4() {
            if let Some(c) = self.at(n) {
                if !c.is_wall && !c.visited {
                    buf.push(n);
                }
            }
        }
    }

    /// Set or clear the wall flag at `p`.
    ///
    /// Start and end cells cannot become walls.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let cell = self.cell_mut(p)?;
        if wall && cell.is_endpoint() {
            return Err(GridError::RoleConflict(p));
        }
        cell.is_wall = wall;
        Ok(())
    }

    /// Clear the search-transient fields of every cell.
    pub fn clear_search(&mut self) {
        for c in &mut self.cells {
            c.clear_search();
        }
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, f: impl FnMut(&&Cell) -> bool) -> usize {
        self.cells.iter().filter(f).count()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(cols: i32, rows: i32) -> Grid {
        Grid::build(&GridConfig::open(
            cols,
            rows,
            Point::new(0, 0),
            Point::new(cols - 1, rows - 1),
        ))
        .unwrap()
    }

    #[test]
    fn build_marks_roles() {
        let cfg = GridConfig::open(4, 3, Point::new(0, 1), Point::new(3, 1))
            .with_walls([Point::new(2, 0), Point::new(2, 1)]);
        let g = Grid::build(&cfg).unwrap();
        assert_eq!(g.cols(), 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cell_count(), 12);
        assert!(g.at(Point::new(0, 1)).unwrap().is_start);
        assert!(g.at(Point::new(3, 1)).unwrap().is_end);
        assert!(g.at(Point::new(2, 1)).unwrap().is_wall);
        assert_eq!(g.count_fn(|c| c.is_wall), 2);
        assert_eq!(g.count_fn(|c| c.is_start), 1);
        assert_eq!(g.count_fn(|c| c.is_end), 1);
        assert_eq!(g.at(Point::new(4, 0)), None);
    }

    #[test]
    fn cells_know_their_position() {
        let g = open(3, 2);
        for (p, c) in g.bounds().iter().zip(g.iter()) {
            assert_eq!(c.pos, p);
        }
    }

    #[test]
    fn build_rejects_bad_layout() {
        let cfg = GridConfig::open(3, 3, Point::new(0, 0), Point::new(3, 3));
        assert!(matches!(
            Grid::build(&cfg),
            Err(GridError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let cfg = GridConfig::open(3, 3, Point::new(0, 0), Point::new(2, 2))
            .with_walls([Point::new(2, 1)]);
        let mut g = Grid::build(&cfg).unwrap();
        let mut buf = Vec::new();

        g.neighbors(Point::new(1, 1), &mut buf);
        // up, down, left; right is a wall.
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(1, 2), Point::new(0, 1)]);

        g.cell_mut(Point::new(1, 0)).unwrap().visited = true;
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 2), Point::new(0, 1)]);

        // Corner: only in-bounds candidates.
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }

    #[test]
    fn set_wall_respects_endpoints() {
        let mut g = open(3, 3);
        assert!(g.set_wall(Point::new(1, 1), true).is_ok());
        assert!(g.at(Point::new(1, 1)).unwrap().is_wall);
        assert_eq!(
            g.set_wall(Point::new(0, 0), true),
            Err(GridError::RoleConflict(Point::new(0, 0)))
        );
        assert!(matches!(
            g.set_wall(Point::new(7, 0), true),
            Err(GridError::InvalidCoordinate { .. })
        ));
        assert!(g.set_wall(Point::new(1, 1), false).is_ok());
        assert!(!g.at(Point::new(1, 1)).unwrap().is_wall);
    }

    #[test]
    fn clear_search_resets_transients() {
        let mut g = open(2, 2);
        {
            let c = g.cell_mut(Point::new(1, 0)).unwrap();
            c.visited = true;
            c.parent = Some(Point::new(0, 0));
            c.score = 3.0;
        }
        g.clear_search();
        assert_eq!(g.count_fn(|c| c.visited || c.parent.is_some()), 0);
    }
}
