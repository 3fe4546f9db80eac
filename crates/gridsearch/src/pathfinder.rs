use std::collections::HashSet;

use gridsearch_core::{Cell, Grid, Path};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::config::SearchConfig;
use crate::dfs::DepthFirst;
use crate::error::SearchError;
use crate::greedy::GreedyBestFirst;
use crate::ids::IterativeDeepening;
use crate::outcome::{Outcome, Report};
use crate::problem::Problem;
use crate::random::RandomWalk;
use crate::strategy::Strategy;
use crate::traits::Search;
use crate::ucs::UniformCost;

/// Runs the search [`Strategy`] it was configured with.
///
/// The only state kept between calls is the random number generator of the
/// random walk; every other strategy starts from scratch on each call.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    strategy: Strategy,
    config: SearchConfig,
    rng: StdRng,
}

impl Pathfinder {
    /// Create a pathfinder with the default [`SearchConfig`].
    pub fn new(strategy: Strategy) -> Self {
        Self::with_config(strategy, SearchConfig::default())
    }

    pub fn with_config(strategy: Strategy, config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            strategy,
            config,
            rng,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search a route on a `rows × cols` grid.
    ///
    /// Fails only if the inputs break the preconditions; an unreachable goal
    /// is reported as [`Outcome::NoRoute`].
    pub fn find_path(
        &mut self,
        start: Cell,
        goal: Cell,
        obstacles: &HashSet<Cell>,
        rows: i32,
        cols: i32,
    ) -> Result<Outcome, SearchError> {
        let problem = Problem::new(start, goal, obstacles, rows, cols)?;
        Ok(self.search(&problem).outcome)
    }

    /// Like [`find_path`](Self::find_path), collapsed to a plain path:
    /// empty when there is nothing to do or no route was found.
    pub fn find_moves(
        &mut self,
        start: Cell,
        goal: Cell,
        obstacles: &HashSet<Cell>,
        rows: i32,
        cols: i32,
    ) -> Result<Path, SearchError> {
        self.find_path(start, goal, obstacles, rows, cols)
            .map(Outcome::into_path)
    }

    /// Search a route on an owned grid, with the search effort.
    pub fn find_on_grid(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Report, SearchError> {
        let problem = Problem::on_grid(grid, start, goal)?;
        Ok(self.search(&problem))
    }
}

impl Search for Pathfinder {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        let report = match self.strategy {
            Strategy::BreadthFirst => BreadthFirst.search(problem),
            Strategy::DepthFirst => DepthFirst.search(problem),
            Strategy::IterativeDeepening => {
                IterativeDeepening::new(self.config.max_depth).search(problem)
            }
            Strategy::UniformCost => UniformCost.search(problem),
            Strategy::GreedyBestFirst => GreedyBestFirst.search(problem),
            Strategy::AStar => AStar.search(problem),
            Strategy::RandomWalk => {
                RandomWalk::with_max_steps(&mut self.rng, self.config.max_steps).search(problem)
            }
        };
        log::debug!(
            "{}: {} -> {}: {} ({} expanded)",
            self.strategy,
            problem.start(),
            problem.goal(),
            match &report.outcome {
                Outcome::Found(p) => format!("{} moves", p.len()),
                Outcome::AlreadyAtGoal => "already at goal".to_string(),
                Outcome::NoRoute => "no route".to_string(),
                Outcome::BudgetExhausted => "budget exhausted".to_string(),
            },
            report.expanded
        );
        report
    }
}
