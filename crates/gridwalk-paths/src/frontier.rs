use gridwalk_core::Point;

/// The set of discovered-but-not-yet-expanded cells of a run.
///
/// A frontier holds coordinates only; the grid stays the owner of cells.
/// `score` is the ranking key for scored frontiers and ignored by the
/// unscored ones.
pub trait Frontier {
    /// Add a pending cell.
    fn push(&mut self, pos: Point, score: f64);

    /// Remove and return the next cell to expand, per the frontier's rule.
    fn pop_next(&mut self) -> Option<Point>;

    /// Number of pending entries (duplicates included).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the pending coordinates, in no guaranteed order.
    fn points(&self) -> Vec<Point>;
}

/// A frontier ranked by score that can answer membership queries.
pub trait ScoredFrontier: Frontier {
    /// Whether an entry matching `pos`/`score` is pending. Each
    /// implementation decides whether it matches on identity or on score.
    fn contains(&self, pos: Point, score: f64) -> bool;
}
