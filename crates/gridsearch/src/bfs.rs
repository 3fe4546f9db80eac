use std::collections::VecDeque;

use crate::arena::{Arena, CellMap};
use crate::neighbors::Neighbors;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;

/// Breadth-first search.
///
/// Explores cells in non-decreasing move-count order with a FIFO frontier,
/// so the first time the goal is dequeued its path is a shortest one.
/// A cell is marked visited when it is dequeued, not when it is enqueued:
/// the same cell may sit in the queue several times and the first dequeue
/// wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Search for BreadthFirst {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut arena = Arena::default();
        let mut visited = CellMap::new(problem.bounds(), false);
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(arena.root(problem.start()));

        let mut nbuf = Neighbors::new();
        let mut expanded = 0;

        while let Some(ni) = queue.pop_front() {
            let node = arena.get(ni);
            if node.cell == problem.goal() {
                return Report::found(arena.path(ni), expanded);
            }
            if visited.mark(node.cell) {
                continue;
            }
            expanded += 1;

            // Already-expanded cells would be discarded on dequeue anyway.
            for &(mv, next) in nbuf.cardinal(node.cell, |c| problem.is_open(c) && !visited.is_marked(c)) {
                queue.push_back(arena.child(ni, mv, next));
            }
        }

        Report::no_route(expanded)
    }
}
