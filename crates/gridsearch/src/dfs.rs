use crate::arena::{Arena, CellMap};
use crate::neighbors::Neighbors;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;

/// Depth-first search.
///
/// Same visiting rule as [`BreadthFirst`](crate::BreadthFirst) (mark on
/// pop), but with a LIFO frontier. Finds a route whenever one exists; the
/// route is usually not the shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl Search for DepthFirst {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut arena = Arena::default();
        let mut visited = CellMap::new(problem.bounds(), false);
        let mut stack = vec![arena.root(problem.start())];

        let mut nbuf = Neighbors::new();
        let mut expanded = 0;

        while let Some(ni) = stack.pop() {
            let node = arena.get(ni);
            if node.cell == problem.goal() {
                return Report::found(arena.path(ni), expanded);
            }
            if visited.mark(node.cell) {
                continue;
            }
            expanded += 1;

            for &(mv, next) in nbuf.cardinal(node.cell, |c| problem.is_open(c) && !visited.is_marked(c)) {
                stack.push(arena.child(ni, mv, next));
            }
        }

        Report::no_route(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, CORRIDOR, WALLED_IN};
    use crate::{BreadthFirst, Cell, Grid, Move, Outcome};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn explores_last_pushed_direction_first() {
        // Right is pushed last, so it is popped first.
        let grid = Grid::new(1, 4);
        let p = Problem::on_grid(&grid, Cell::new(0, 1), Cell::new(0, 3)).unwrap();
        let r = DepthFirst.search(&p);
        assert_eq!(r.into_path().moves(), &[Move::Right, Move::Right]);
    }

    #[test]
    fn open_grid_route_is_valid_but_long() {
        let grid = Grid::new(5, 5);
        let p = Problem::on_grid(&grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        let path = DepthFirst.search(&p).into_path();
        testutil::assert_valid(&p, &path);
        assert!(path.len() >= 8);
    }

    #[test]
    fn corridor_matches_breadth_first() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        let p = Problem::on_grid(&grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        assert_eq!(DepthFirst.search(&p).outcome, BreadthFirst.search(&p).outcome);
    }

    #[test]
    fn walled_in_start() {
        let grid = Grid::parse(WALLED_IN).unwrap();
        let p = Problem::on_grid(&grid, Cell::new(2, 2), Cell::new(4, 4)).unwrap();
        assert_eq!(DepthFirst.search(&p).outcome, Outcome::NoRoute);
    }

    #[test]
    fn complete_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let start = Cell::new(5, 5);
            let grid = testutil::random_grid(&mut rng, 10, 10, 35, &[start]);
            let goal = testutil::random_open_cell(&mut rng, &grid);
            let p = Problem::on_grid(&grid, start, goal).unwrap();
            let report = DepthFirst.search(&p);
            match testutil::distance(&grid, start, goal) {
                Some(0) => assert_eq!(report.outcome, Outcome::AlreadyAtGoal),
                Some(d) => {
                    let path = report.into_path();
                    assert!(path.len() >= d);
                    testutil::assert_valid(&p, &path);
                }
                None => assert_eq!(report.outcome, Outcome::NoRoute),
            }
        }
    }
}
