//! [`ScoreTree`]: the A* frontier.
//!
//! A plain binary search tree keyed by score with one entry per node. It is
//! not a production priority queue, and its limitations are part of the
//! observable search behaviour:
//!
//! - **Unbalanced.** Nodes are inserted in arrival order and never rotated,
//!   so a monotone score sequence degrades the tree into a chain and every
//!   operation into O(n). All walks are iterative, so a long chain costs
//!   time but not stack.
//! - **Ties go right.** `score < node.score` descends left, anything else
//!   (including equality) descends right. The leftmost node among equal
//!   scores is therefore the earliest inserted.
//! - **Minimum-only removal.** [`pop_next`](Frontier::pop_next) removes the
//!   leftmost node and splices its right subtree into the slot it occupied,
//!   so entries beside a non-root minimum stay pending. There is no removal
//!   of arbitrary entries.
//! - **Membership by score.** [`contains`](ScoredFrontier::contains) is a
//!   binary search on the score alone. A different cell that happens to
//!   carry an equal score reports as present.

use std::fmt;

use gridwalk_core::Point;

use crate::frontier::{Frontier, ScoredFrontier};

struct Node {
    score: f64,
    pos: Point,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Unbalanced score-keyed binary search tree.
#[derive(Default)]
pub struct ScoreTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl ScoreTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in pre-order: every node comes after all of its ancestors.
    fn preorder(&self) -> Vec<&Node> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }
}

// Re-inserting in pre-order rebuilds the exact same shape.
impl Clone for ScoreTree {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        for node in self.preorder() {
            tree.push(node.pos, node.score);
        }
        tree
    }
}

impl fmt::Debug for ScoreTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreTree")
            .field("len", &self.len)
            .field("points", &self.points())
            .finish()
    }
}

impl Drop for ScoreTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Frontier for ScoreTree {
    fn push(&mut self, pos: Point, score: f64) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if score < node.score {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node {
            score,
            pos,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    fn pop_next(&mut self) -> Option<Point> {
        let mut slot = &mut self.root;
        while slot.as_ref().is_some_and(|n| n.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        let mut node = slot.take()?;
        *slot = node.right.take();
        self.len -= 1;
        Some(node.pos)
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Pending coordinates in ascending score order.
    fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.push(node.pos);
            cur = node.right.as_deref();
        }
        out
    }
}

impl ScoredFrontier for ScoreTree {
    fn contains(&self, _pos: Point, score: f64) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if score == node.score {
                return true;
            }
            cur = if score < node.score {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }
}
