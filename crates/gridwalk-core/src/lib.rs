//! **gridwalk-core**: grid and cell model for step-driven pathfinding.
//!
//! This crate provides the leaf types shared by the *gridwalk* workspace:
//! geometry primitives, the [`Cell`] with its role and search fields, the
//! owning [`Grid`], and the [`GridConfig`] layout a grid is built from.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range, manhattan};
pub use grid::Grid;
