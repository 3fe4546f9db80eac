use crate::arena::{Arena, CellMap};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;

/// Greedy best-first search.
///
/// The frontier is ordered by the Manhattan estimate alone, ignoring the
/// cost already paid. Heads straight for the goal when the way is clear;
/// routes around obstacles may be far from the shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBestFirst;

impl Search for GreedyBestFirst {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut arena = Arena::default();
        let mut visited = CellMap::new(problem.bounds(), false);
        let mut open: Frontier<usize> = Frontier::new();
        let start = problem.start();
        open.push(arena.root(start), problem.estimate(start));

        let mut nbuf = Neighbors::new();
        let mut expanded = 0;

        while let Some((ni, _)) = open.pop() {
            let node = arena.get(ni);
            if node.cell == problem.goal() {
                return Report::found(arena.path(ni), expanded);
            }
            if visited.mark(node.cell) {
                continue;
            }
            expanded += 1;

            for &(mv, next) in nbuf.cardinal(node.cell, |c| problem.is_open(c) && !visited.is_marked(c)) {
                open.push(arena.child(ni, mv, next), problem.estimate(next));
            }
        }

        Report::no_route(expanded)
    }
}
