//! **gridsearch-core**: core types for searching routes on bounded 2D grids.
//!
//! This crate provides the value types shared by the *gridsearch* engine and
//! its drivers: [`Cell`] coordinates, [`Bounds`], the four unit [`Move`]s,
//! [`Path`] sequences of moves, and an owned obstacle [`Grid`].

pub mod geom;
pub mod grid;
pub mod moves;
pub mod path;

pub use geom::{Bounds, BoundsIter, Cell};
pub use grid::{Grid, GridParseError};
pub use moves::Move;
pub use path::{Path, Trajectory};
