use crate::arena::{Arena, CellMap};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;
use crate::ucs::{STEP_COST, UNREACHABLE};

/// A* search with the Manhattan heuristic.
///
/// The frontier is ordered by `g + manhattan(cell, goal)`, ties broken by
/// insertion order. The heuristic is consistent on a 4-connected unit-cost
/// grid, so routes are as short as [`BreadthFirst`](crate::BreadthFirst)'s
/// while usually far fewer cells are expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Search for AStar {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut arena = Arena::default();
        let mut finalized = CellMap::new(problem.bounds(), UNREACHABLE);
        let mut open: Frontier<(usize, i32)> = Frontier::new();
        let start = problem.start();
        open.push((arena.root(start), 0), problem.estimate(start));

        let mut nbuf = Neighbors::new();
        let mut expanded = 0;

        while let Some(((ni, g), _)) = open.pop() {
            let node = arena.get(ni);
            if node.cell == problem.goal() {
                return Report::found(arena.path(ni), expanded);
            }
            let Some(best) = finalized.get_mut(node.cell) else {
                continue;
            };
            if *best <= g {
                continue;
            }
            *best = g;
            expanded += 1;

            let next_g = g + STEP_COST;
            for &(mv, next) in nbuf.cardinal(node.cell, |c| {
                problem.is_open(c) && finalized.get(c).is_some_and(|&b| b > next_g)
            }) {
                let f = next_g + problem.estimate(next);
                open.push((arena.child(ni, mv, next), next_g), f);
            }
        }

        Report::no_route(expanded)
    }
}
