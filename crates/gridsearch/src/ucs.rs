use crate::arena::{Arena, CellMap};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;

/// Cost of one move. Every move on the grid costs the same.
pub(crate) const STEP_COST: i32 = 1;

/// Sentinel cost of a cell that has not been finalized.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Uniform-cost (Dijkstra) search.
///
/// Pops the frontier entry with the lowest accumulated cost and skips cells
/// already finalized at an equal or lower cost. With unit step costs it
/// returns routes as short as [`BreadthFirst`](crate::BreadthFirst).
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Search for UniformCost {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut arena = Arena::default();
        let mut finalized = CellMap::new(problem.bounds(), UNREACHABLE);
        let mut open: Frontier<usize> = Frontier::new();
        open.push(arena.root(problem.start()), 0);

        let mut nbuf = Neighbors::new();
        let mut expanded = 0;

        while let Some((ni, cost)) = open.pop() {
            let node = arena.get(ni);
            if node.cell == problem.goal() {
                return Report::found(arena.path(ni), expanded);
            }
            let Some(best) = finalized.get_mut(node.cell) else {
                continue;
            };
            if *best <= cost {
                continue;
            }
            *best = cost;
            expanded += 1;

            let next_cost = cost + STEP_COST;
            for &(mv, next) in nbuf.cardinal(node.cell, |c| {
                problem.is_open(c) && finalized.get(c).is_some_and(|&g| g > next_cost)
            }) {
                open.push(arena.child(ni, mv, next), next_cost);
            }
        }

        Report::no_route(expanded)
    }
}
