//! Step-driven grid search for pathfinding visualizers.
//!
//! This crate runs breadth-first, depth-first, best-first and A* searches
//! over a [`gridwalk_core::Grid`] one expansion at a time, so a host can draw
//! every intermediate frontier:
//!
//! - **Search engine** ([`SearchContext::launch`], [`SearchContext::step`])
//! - **Path reconstruction** ([`SearchContext::reconstruct_step`])
//! - **Frontiers**: [`FifoQueue`], [`LifoStack`], [`ScanSet`], [`ScoreTree`]
//! - **Heuristic** scoring ([`Heuristic`])
//!
//! # Frontier traits
//!
//! | Trait | Implemented by |
//! |---|---|
//! | [`Frontier`] | all four frontiers |
//! | [`ScoredFrontier`] : [`Frontier`] | [`ScanSet`] (identity), [`ScoreTree`] (score) |
//!
//! None of the strategies promise optimal paths except breadth-first on an
//! open grid; depth-first and best-first are intentionally greedy.

mod context;
mod error;
mod frontier;
mod heuristic;
mod queue;
mod reconstruct;
mod scanset;
mod scoretree;
mod stack;
mod strategy;

pub use context::SearchContext;
pub use error::SearchError;
pub use frontier::{Frontier, ScoredFrontier};
pub use heuristic::Heuristic;
pub use queue::FifoQueue;
pub use reconstruct::{PathProgress, Reconstructor};
pub use scanset::ScanSet;
pub use scoretree::ScoreTree;
pub use stack::LifoStack;
pub use strategy::{RunState, Strategy};
