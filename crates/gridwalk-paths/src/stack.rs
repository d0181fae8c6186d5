use gridwalk_core::Point;

use crate::frontier::Frontier;

/// Last-in first-out frontier used by depth-first search.
///
/// The same coordinate may be pushed several times; every copy stays on the
/// stack until popped.
#[derive(Clone, Debug, Default)]
pub struct LifoStack {
    items: Vec<Point>,
}

impl LifoStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoStack {
    fn push(&mut self, pos: Point, _score: f64) {
        self.items.push(pos);
    }

    fn pop_next(&mut self) -> Option<Point> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn points(&self) -> Vec<Point> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_most_recent_first_and_keeps_duplicates() {
        let mut s = LifoStack::new();
        let a = Point::new(1, 1);
        let b = Point::new(2, 1);
        s.push(a, 0.0);
        s.push(b, 0.0);
        s.push(a, 0.0);
        assert_eq!(s.len(), 3);
        assert_eq!(s.points(), vec![a, b, a]);
        assert_eq!(s.pop_next(), Some(a));
        assert_eq!(s.pop_next(), Some(b));
        assert_eq!(s.pop_next(), Some(a));
        assert_eq!(s.pop_next(), None);
        assert!(s.is_empty());
    }
}
