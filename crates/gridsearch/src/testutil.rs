//! Shared fixtures for strategy tests.

use std::collections::VecDeque;

use gridsearch_core::{Cell, Grid, Path};
use rand::Rng;

use crate::problem::Problem;

/// A one-cell-wide corridor from (0, 0) to (4, 4) with a single route.
pub(crate) const CORRIDOR: &str = "\
.####
.####
...##
##.##
##...";

/// A 5×5 grid whose centre cell is blocked in on all four sides.
pub(crate) const WALLED_IN: &str = "\
.....
..#..
.#.#.
..#..
.....";

/// Assert that `path` leads from the problem's start to its goal through
/// open cells only.
pub(crate) fn assert_valid(problem: &Problem<'_>, path: &Path) {
    assert_eq!(
        path.end(problem.start()),
        problem.goal(),
        "path {path} does not end at the goal"
    );
    assert!(
        path.is_walkable(problem.start(), problem.bounds(), problem.obstacles()),
        "path {path} crosses an obstacle or the grid edge"
    );
}

/// Shortest route length, computed independently of the strategies.
pub(crate) fn distance(grid: &Grid, start: Cell, goal: Cell) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.bounds().len()];
    let idx = |c: Cell| grid.bounds().index(c);
    dist[idx(start)?] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some(c) = queue.pop_front() {
        let d = dist[idx(c)?];
        if c == goal {
            return Some(d);
        }
        for (_, n) in grid.open_neighbors(c) {
            let ni = idx(n)?;
            if dist[ni] == usize::MAX {
                dist[ni] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

/// A random grid with roughly `pct` percent obstacles, leaving `keep` open.
pub(crate) fn random_grid(
    rng: &mut impl Rng,
    rows: i32,
    cols: i32,
    pct: u32,
    keep: &[Cell],
) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for c in grid.bounds().iter() {
        if !keep.contains(&c) && rng.random_range(0..100) < pct {
            grid.add_obstacle(c);
        }
    }
    grid
}

/// A random open cell of `grid`.
pub(crate) fn random_open_cell(rng: &mut impl Rng, grid: &Grid) -> Cell {
    loop {
        let c = Cell::new(
            rng.random_range(0..grid.rows()),
            rng.random_range(0..grid.cols()),
        );
        if grid.is_open(c) {
            return c;
        }
    }
}
