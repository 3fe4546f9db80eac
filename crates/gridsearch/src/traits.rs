use crate::outcome::Report;
use crate::problem::Problem;

/// A route-search strategy.
///
/// Implementations explore the grid of `problem` as a 4-connected graph and
/// report whether, and how, the goal can be reached. They must not keep any
/// search state between calls.
pub trait Search {
    /// Search for a path from `problem.start()` to `problem.goal()`.
    fn search(&mut self, problem: &Problem<'_>) -> Report;
}
