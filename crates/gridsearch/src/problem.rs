use std::collections::HashSet;

use gridsearch_core::{Bounds, Cell, Grid};

use crate::error::{Endpoint, SearchError};
use crate::heuristic::manhattan;

/// Validated inputs of one search: endpoints, grid bounds and obstacles.
///
/// Construction checks the preconditions every strategy relies on: the grid
/// is non-empty and both endpoints are in bounds and open. The obstacle set
/// is borrowed and never modified.
#[derive(Debug, Clone, Copy)]
pub struct Problem<'a> {
    start: Cell,
    goal: Cell,
    bounds: Bounds,
    obstacles: &'a HashSet<Cell>,
}

impl<'a> Problem<'a> {
    /// Create a problem on a `rows × cols` grid.
    pub fn new(
        start: Cell,
        goal: Cell,
        obstacles: &'a HashSet<Cell>,
        rows: i32,
        cols: i32,
    ) -> Result<Self, SearchError> {
        let bounds = Bounds::new(rows, cols);
        if bounds.is_empty() {
            return Err(SearchError::EmptyGrid { rows, cols });
        }
        let problem = Self {
            start,
            goal,
            bounds,
            obstacles,
        };
        problem.check(Endpoint::Start, start)?;
        problem.check(Endpoint::Goal, goal)?;
        Ok(problem)
    }

    /// Create a problem on an owned [`Grid`].
    pub fn on_grid(grid: &'a Grid, start: Cell, goal: Cell) -> Result<Self, SearchError> {
        Self::new(start, goal, grid.obstacles(), grid.rows(), grid.cols())
    }

    fn check(&self, endpoint: Endpoint, cell: Cell) -> Result<(), SearchError> {
        if !self.bounds.contains(cell) {
            return Err(SearchError::OutOfBounds { endpoint, cell });
        }
        if self.obstacles.contains(&cell) {
            return Err(SearchError::Blocked { endpoint, cell });
        }
        Ok(())
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn obstacles(&self) -> &'a HashSet<Cell> {
        self.obstacles
    }

    /// Whether `c` is in bounds and not an obstacle.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.bounds.contains(c) && !self.obstacles.contains(&c)
    }

    /// Whether start and goal coincide, so that no move is needed.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.start == self.goal
    }

    /// Heuristic estimate of the remaining cost from `c` to the goal.
    #[inline]
    pub fn estimate(&self, c: Cell) -> i32 {
        manhattan(c, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grid() {
        let obstacles = HashSet::new();
        let err = Problem::new(Cell::ZERO, Cell::ZERO, &obstacles, 0, 3).unwrap_err();
        assert_eq!(err, SearchError::EmptyGrid { rows: 0, cols: 3 });
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let obstacles = HashSet::new();
        let err = Problem::new(Cell::new(5, 0), Cell::ZERO, &obstacles, 5, 5).unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                cell: Cell::new(5, 0)
            }
        );
        let err = Problem::new(Cell::ZERO, Cell::new(0, -1), &obstacles, 5, 5).unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                cell: Cell::new(0, -1)
            }
        );
    }

    #[test]
    fn rejects_blocked_endpoints() {
        let obstacles: HashSet<Cell> = [Cell::new(2, 2)].into_iter().collect();
        let err = Problem::new(Cell::ZERO, Cell::new(2, 2), &obstacles, 5, 5).unwrap_err();
        assert_eq!(
            err,
            SearchError::Blocked {
                endpoint: Endpoint::Goal,
                cell: Cell::new(2, 2)
            }
        );
        assert_eq!(err.to_string(), "search: goal (2, 2) is an obstacle");
    }

    #[test]
    fn open_cells_and_estimate() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let p = Problem::on_grid(&grid, Cell::ZERO, Cell::new(2, 2)).unwrap();
        assert!(p.is_open(Cell::new(0, 1)));
        assert!(!p.is_open(Cell::new(1, 1)));
        assert!(!p.is_open(Cell::new(3, 0)));
        assert_eq!(p.estimate(Cell::ZERO), 4);
        assert!(!p.is_trivial());
    }
}
