//! Route search on bounded 2D grids with static obstacles.
//!
//! This crate provides a family of interchangeable search strategies that
//! share one contract: given a start cell, a goal cell, a set of blocked
//! cells and grid bounds, produce the ordered [`Path`] of unit moves from
//! start to goal, or report why there is none.
//!
//! | Strategy | Frontier | Shortest path |
//! |---|---|---|
//! | [`BreadthFirst`] | FIFO queue | yes |
//! | [`DepthFirst`] | LIFO stack | no |
//! | [`IterativeDeepening`] | depth-limited stack | yes |
//! | [`UniformCost`] | min-heap on cost | yes |
//! | [`AStar`] | min-heap on cost + [`manhattan`] | yes |
//! | [`GreedyBestFirst`] | min-heap on [`manhattan`] | no |
//! | [`RandomWalk`] | none | no |
//!
//! Every strategy implements [`Search`]. The [`Pathfinder`] facade picks one
//! from a [`Strategy`] value and a [`SearchConfig`], which is the usual entry
//! point:
//!
//! ```
//! use std::collections::HashSet;
//! use gridsearch::{Cell, Pathfinder, Strategy};
//!
//! let mut finder = Pathfinder::new(Strategy::AStar);
//! let outcome = finder
//!     .find_path(Cell::new(0, 0), Cell::new(4, 4), &HashSet::new(), 5, 5)
//!     .unwrap();
//! assert_eq!(outcome.path().map(|p| p.len()), Some(8));
//! ```
//!
//! All search state (frontier, visited record, partial paths) lives inside a
//! single call; nothing is shared between calls.

mod arena;
mod astar;
mod bfs;
mod config;
mod dfs;
mod error;
mod frontier;
mod greedy;
mod heuristic;
mod ids;
mod neighbors;
mod outcome;
mod pathfinder;
mod problem;
mod random;
mod strategy;
mod traits;
mod ucs;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS, SearchConfig};
pub use dfs::DepthFirst;
pub use error::{Endpoint, ParseStrategyError, SearchError};
pub use greedy::GreedyBestFirst;
pub use heuristic::manhattan;
pub use ids::IterativeDeepening;
pub use neighbors::Neighbors;
pub use outcome::{Outcome, Report};
pub use pathfinder::Pathfinder;
pub use problem::Problem;
pub use random::RandomWalk;
pub use strategy::Strategy;
pub use traits::Search;
pub use ucs::UniformCost;

pub use gridsearch_core::{Bounds, Cell, Grid, Move, Path};

#[cfg(test)]
mod testutil;
