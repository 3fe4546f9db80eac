use gridsearch_core::{Bounds, Cell, Path};

use crate::arena::{Arena, CellMap};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::neighbors::Neighbors;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;

/// Iterative deepening depth-first search.
///
/// Runs a depth-limited DFS with limits `0, 1, 2, …` below `max_depth`, each
/// pass with a fresh visited record, and returns the first path found. The
/// record keeps the shallowest depth at which each cell was expanded and a
/// cell reached again at a strictly shallower depth is expanded again, so
/// the first successful limit yields a shortest path.
#[derive(Debug, Clone, Copy)]
pub struct IterativeDeepening {
    max_depth: usize,
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Result of one depth-limited pass.
enum Pass {
    Found(Path),
    /// Some node was pruned at the limit; a deeper pass may succeed.
    CutOff,
    /// Nothing was pruned: the whole reachable region was explored.
    Exhausted,
}

/// Shallowest expansion depth per cell, shared by all passes of one search.
///
/// Entries are stamped with the pass that wrote them; an entry from an
/// earlier pass reads as unvisited, so starting a pass costs nothing.
struct DepthRecord {
    pass: usize,
    map: CellMap<(usize, usize)>,
}

impl DepthRecord {
    fn new(bounds: Bounds) -> Self {
        Self {
            pass: 0,
            map: CellMap::new(bounds, (0, usize::MAX)),
        }
    }

    fn begin_pass(&mut self, limit: usize) {
        self.pass = limit + 1;
    }

    /// Depth recorded for `c` in the current pass, `usize::MAX` if none, or
    /// `None` if `c` is out of bounds.
    fn get(&self, c: Cell) -> Option<usize> {
        let &(pass, depth) = self.map.get(c)?;
        Some(if pass == self.pass { depth } else { usize::MAX })
    }

    fn set(&mut self, c: Cell, depth: usize) {
        let pass = self.pass;
        if let Some(entry) = self.map.get_mut(c) {
            *entry = (pass, depth);
        }
    }
}

impl IterativeDeepening {
    /// Create a search that tries depth limits `0..max_depth`.
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn depth_limited(
        problem: &Problem<'_>,
        limit: usize,
        shallowest: &mut DepthRecord,
        expanded: &mut usize,
    ) -> Pass {
        shallowest.begin_pass(limit);
        let mut arena = Arena::with_capacity(4 * limit + 1);
        let mut stack = vec![arena.root(problem.start())];
        let mut nbuf = Neighbors::new();
        let mut cut_off = false;

        while let Some(ni) = stack.pop() {
            let node = arena.get(ni);
            if node.cell == problem.goal() {
                return Pass::Found(arena.path(ni));
            }
            if node.depth >= limit {
                cut_off = true;
                continue;
            }
            let Some(best) = shallowest.get(node.cell) else {
                continue;
            };
            if best <= node.depth {
                continue;
            }
            shallowest.set(node.cell, node.depth);
            *expanded += 1;

            let depth = node.depth + 1;
            for &(mv, next) in nbuf.cardinal(node.cell, |c| {
                problem.is_open(c) && shallowest.get(c).is_some_and(|d| d > depth)
            }) {
                stack.push(arena.child(ni, mv, next));
            }
        }

        log::trace!(
            "depth-limited pass {limit}: {} nodes, cut off: {cut_off}",
            arena.len()
        );
        if cut_off { Pass::CutOff } else { Pass::Exhausted }
    }
}

impl Search for IterativeDeepening {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut shallowest = DepthRecord::new(problem.bounds());
        let mut expanded = 0;
        for limit in 0..self.max_depth {
            match Self::depth_limited(problem, limit, &mut shallowest, &mut expanded) {
                Pass::Found(path) => return Report::found(path, expanded),
                Pass::Exhausted => return Report::no_route(expanded),
                Pass::CutOff => {}
            }
        }
        Report::exhausted(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, CORRIDOR, WALLED_IN};
    use crate::{BreadthFirst, Cell, Grid, Outcome};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn open_grid_shortest() {
        let grid = Grid::new(5, 5);
        let p = Problem::on_grid(&grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        let path = IterativeDeepening::default().search(&p).into_path();
        assert_eq!(path.len(), 8);
        testutil::assert_valid(&p, &path);
    }

    #[test]
    fn corridor() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        let p = Problem::on_grid(&grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        assert_eq!(
            IterativeDeepening::default().search(&p).outcome,
            BreadthFirst.search(&p).outcome
        );
    }

    #[test]
    fn unreachable_stops_before_cap() {
        let grid = Grid::parse(WALLED_IN).unwrap();
        let p = Problem::on_grid(&grid, Cell::new(2, 2), Cell::new(0, 0)).unwrap();
        let r = IterativeDeepening::default().search(&p);
        assert_eq!(r.outcome, Outcome::NoRoute);
        // Limit 0 cuts the start off; limit 1 expands it and finds nothing
        // to prune.
        assert_eq!(r.expanded, 1);
    }

    #[test]
    fn goal_beyond_cap_exhausts_budget() {
        let grid = Grid::new(1, 12);
        let p = Problem::on_grid(&grid, Cell::new(0, 0), Cell::new(0, 11)).unwrap();
        let r = IterativeDeepening::new(11).search(&p);
        assert_eq!(r.outcome, Outcome::BudgetExhausted);
        let r = IterativeDeepening::new(12).search(&p);
        assert_eq!(r.into_path().len(), 11);
    }

    #[test]
    fn depth_record_forgets_earlier_passes() {
        let mut record = DepthRecord::new(Bounds::new(3, 3));
        record.begin_pass(0);
        record.set(Cell::new(1, 1), 0);
        assert_eq!(record.get(Cell::new(1, 1)), Some(0));
        record.begin_pass(1);
        assert_eq!(record.get(Cell::new(1, 1)), Some(usize::MAX));
        record.set(Cell::new(1, 1), 1);
        assert_eq!(record.get(Cell::new(1, 1)), Some(1));
        assert_eq!(record.get(Cell::new(3, 0)), None);
    }

    #[test]
    fn same_length_as_breadth_first() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..150 {
            let start = Cell::new(0, 0);
            let grid = testutil::random_grid(&mut rng, 8, 8, 30, &[start]);
            let goal = testutil::random_open_cell(&mut rng, &grid);
            let p = Problem::on_grid(&grid, start, goal).unwrap();
            // No shortest route on an 8x8 grid is longer than 63 moves.
            let ids = IterativeDeepening::new(64).search(&p);
            let bfs = BreadthFirst.search(&p);
            match (&ids.outcome, &bfs.outcome) {
                (Outcome::Found(a), Outcome::Found(b)) => {
                    assert_eq!(a.len(), b.len());
                    testutil::assert_valid(&p, a);
                }
                (a, b) => assert_eq!(a, b),
            }
        }
    }
}
