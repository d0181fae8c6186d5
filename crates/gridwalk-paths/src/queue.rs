use std::collections::VecDeque;

use gridwalk_core::Point;

use crate::frontier::Frontier;

/// First-in first-out frontier used by breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct FifoQueue {
    items: VecDeque<Point>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoQueue {
    fn push(&mut self, pos: Point, _score: f64) {
        self.items.push_back(pos);
    }

    fn pop_next(&mut self) -> Option<Point> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn points(&self) -> Vec<Point> {
        self.items.iter().copied().collect()
    }
}
