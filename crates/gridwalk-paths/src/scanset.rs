use gridwalk_core::Point;

use crate::frontier::{Frontier, ScoredFrontier};

/// Unordered frontier used by best-first search.
///
/// Popping scans every entry for the lowest score, so each pop is O(n).
/// Entries keep insertion order and the first strictly-lower score wins, so
/// ties resolve to the earliest pushed entry. Membership is by coordinate.
#[derive(Clone, Debug, Default)]
pub struct ScanSet {
    items: Vec<(Point, f64)>,
}

impl ScanSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn min_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &(_, score)) in self.items.iter().enumerate() {
            match best {
                Some((_, min)) if score >= min => {}
                _ => best = Some((i, score)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl Frontier for ScanSet {
    fn push(&mut self, pos: Point, score: f64) {
        self.items.push((pos, score));
    }

    fn pop_next(&mut self) -> Option<Point> {
        let i = self.min_index()?;
        Some(self.items.remove(i).0)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn points(&self) -> Vec<Point> {
        self.items.iter().map(|&(p, _)| p).collect()
    }
}

impl ScoredFrontier for ScanSet {
    fn contains(&self, pos: Point, _score: f64) -> bool {
        self.items.iter().any(|&(p, _)| p == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_score() {
        let mut s = ScanSet::new();
        s.push(Point::new(0, 0), 5.0);
        s.push(Point::new(1, 0), 2.0);
        s.push(Point::new(2, 0), 9.0);
        assert_eq!(s.pop_next(), Some(Point::new(1, 0)));
        assert_eq!(s.pop_next(), Some(Point::new(0, 0)));
        assert_eq!(s.pop_next(), Some(Point::new(2, 0)));
        assert_eq!(s.pop_next(), None);
    }

    #[test]
    fn ties_go_to_earliest_entry() {
        let mut s = ScanSet::new();
        s.push(Point::new(3, 3), 1.0);
        s.push(Point::new(0, 0), 1.0);
        assert_eq!(s.pop_next(), Some(Point::new(3, 3)));
        assert_eq!(s.pop_next(), Some(Point::new(0, 0)));
    }

    #[test]
    fn contains_is_by_identity() {
        let mut s = ScanSet::new();
        s.push(Point::new(1, 1), 4.0);
        assert!(s.contains(Point::new(1, 1), 100.0));
        assert!(!s.contains(Point::new(2, 1), 4.0));
    }
}
