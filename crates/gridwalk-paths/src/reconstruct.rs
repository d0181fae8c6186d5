use gridwalk_core::{Grid, Point};

/// Progress report of a [`Reconstructor`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathProgress {
    /// Edges walked so far.
    pub length: usize,
    /// Whether the walk reached a cell without a parent.
    pub done: bool,
}

/// Stepwise walk of parent links from the end cell back to the start.
///
/// Each call to [`step`](Self::step) marks one cell as part of the path. A
/// path of `k` edges is complete after exactly `k + 1` calls; later calls
/// return the final report unchanged. A reconstructor never rewinds itself.
#[derive(Clone, Debug)]
pub struct Reconstructor {
    cursor: Point,
    length: usize,
    done: bool,
}

impl Reconstructor {
    /// Start a walk at `end`.
    pub fn new(end: Point) -> Self {
        Self {
            cursor: end,
            length: 0,
            done: false,
        }
    }

    #[inline]
    pub fn progress(&self) -> PathProgress {
        PathProgress {
            length: self.length,
            done: self.done,
        }
    }

    /// Mark the current cell and move to its parent.
    pub fn step(&mut self, grid: &mut Grid) -> PathProgress {
        if self.done {
            return self.progress();
        }
        // A simple path visits each cell at most once.
        let max_edges = grid.cell_count().saturating_sub(1);
        let Ok(cell) = grid.cell_mut(self.cursor) else {
            log::warn!("reconstruct: cursor {} left the grid", self.cursor);
            self.done = true;
            return self.progress();
        };
        cell.part_of_path = true;
        match cell.parent {
            Some(parent) if self.length < max_edges => {
                self.length += 1;
                self.cursor = parent;
            }
            Some(_) => {
                log::warn!(
                    "reconstruct: parent chain longer than {max_edges} edges, stopping at {}",
                    self.cursor
                );
                self.done = true;
            }
            None => {
                log::debug!("reconstruct: reached {} after {} edges", self.cursor, self.length);
                self.done = true;
            }
        }
        self.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::GridConfig;

    fn line_grid() -> Grid {
        Grid::build(&GridConfig::open(4, 1, Point::new(0, 0), Point::new(3, 0))).unwrap()
    }

    #[test]
    fn walks_parent_chain_in_k_plus_one_calls() {
        let mut g = line_grid();
        for x in 1..4 {
            g.cell_mut(Point::new(x, 0)).unwrap().parent = Some(Point::new(x - 1, 0));
        }
        let mut r = Reconstructor::new(g.end());
        let mut calls = 0;
        let last = loop {
            calls += 1;
            let p = r.step(&mut g);
            if p.done {
                break p;
            }
        };
        assert_eq!(calls, 4);
        assert_eq!(last, PathProgress { length: 3, done: true });
        assert_eq!(r.cursor, g.start());
        assert_eq!(g.count_fn(|c| c.part_of_path), 4);
    }

    #[test]
    fn reports_progress_per_call_and_stays_done() {
        let mut g = line_grid();
        g.cell_mut(Point::new(3, 0)).unwrap().parent = Some(Point::new(2, 0));
        let mut r = Reconstructor::new(g.end());
        assert_eq!(r.step(&mut g), PathProgress { length: 1, done: false });
        assert_eq!(r.step(&mut g), PathProgress { length: 1, done: true });
        assert_eq!(r.step(&mut g), PathProgress { length: 1, done: true });
        assert_eq!(g.count_fn(|c| c.part_of_path), 2);
    }

    #[test]
    fn end_without_parent_marks_only_end() {
        let mut g = line_grid();
        let mut r = Reconstructor::new(g.end());
        assert_eq!(r.step(&mut g), PathProgress { length: 0, done: true });
        assert!(g.at(g.end()).unwrap().part_of_path);
        assert_eq!(g.count_fn(|c| c.part_of_path), 1);
    }

    #[test]
    fn parent_cycle_halts() {
        let mut g = line_grid();
        g.cell_mut(Point::new(3, 0)).unwrap().parent = Some(Point::new(2, 0));
        g.cell_mut(Point::new(2, 0)).unwrap().parent = Some(Point::new(3, 0));
        let mut r = Reconstructor::new(g.end());
        let mut last = r.progress();
        for _ in 0..10 {
            last = r.step(&mut g);
        }
        assert!(last.done);
        assert_eq!(last.length, 3);
    }
}
