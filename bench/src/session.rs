//! A headless agent session: search, walk, score, repeat.

use std::time::{Duration, Instant};

use gridsearch::{Outcome, Pathfinder, Report, SearchError, Strategy};
use gridsearch_core::{Cell, Grid, Move, Path};
use log::{error, info, warn};

/// Why a session ended before its last target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Every attempt failed to find a route.
    NoRoute { from: Cell, to: Cell },
    /// A returned move would leave the grid or enter an obstacle.
    InvalidMove { at: Cell, mv: Move },
}

/// What a session achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub strategy: Strategy,
    /// Targets reached.
    pub score: usize,
    /// Search calls made, retries included.
    pub searches: usize,
    /// Moves walked.
    pub moves: usize,
    /// Cells expanded over all searches.
    pub expanded: usize,
    /// Time spent searching.
    pub elapsed: Duration,
    pub stopped: Option<StopReason>,
}

/// Drives one agent over a fixed grid with one [`Pathfinder`].
pub struct Session<'a> {
    grid: &'a Grid,
    finder: Pathfinder,
    agent: Cell,
    retries: usize,
}

impl<'a> Session<'a> {
    /// Create a session whose searches are retried up to `retries` times
    /// after a failure.
    pub fn new(grid: &'a Grid, finder: Pathfinder, agent: Cell, retries: usize) -> Self {
        Self {
            grid,
            finder,
            agent,
            retries,
        }
    }

    pub fn agent(&self) -> Cell {
        self.agent
    }

    /// Send the agent to each target in turn, stopping at the first one no
    /// route can be found to.
    pub fn run(&mut self, targets: &[Cell]) -> Result<Summary, SearchError> {
        let mut summary = Summary {
            strategy: self.finder.strategy(),
            score: 0,
            searches: 0,
            moves: 0,
            expanded: 0,
            elapsed: Duration::ZERO,
            stopped: None,
        };

        for &target in targets {
            let t0 = Instant::now();
            let (report, attempts) = self.search(target)?;
            let elapsed = t0.elapsed();
            summary.searches += attempts;
            summary.expanded += report.expanded;
            summary.elapsed += elapsed;

            let path = match report.outcome {
                Outcome::Found(path) => path,
                Outcome::AlreadyAtGoal => Path::new(),
                Outcome::NoRoute | Outcome::BudgetExhausted => {
                    warn!(
                        "no path found from {} to {} after {attempts} attempts, stopping",
                        self.agent, target
                    );
                    summary.stopped = Some(StopReason::NoRoute {
                        from: self.agent,
                        to: target,
                    });
                    break;
                }
            };
            info!(
                "algorithm: {}, time taken: {:.6} seconds, path length: {}, expanded: {}",
                summary.strategy,
                elapsed.as_secs_f64(),
                path.len(),
                report.expanded
            );

            if let Err(reason) = self.walk(&path) {
                error!("invalid move from {}, stopping", self.agent);
                summary.stopped = Some(reason);
                break;
            }
            summary.moves += path.len();
            if self.agent == target {
                summary.score += 1;
            }
        }

        Ok(summary)
    }

    /// Search from the agent to `target`, retrying failed attempts. Returns
    /// the last report and the number of attempts made.
    fn search(&mut self, target: Cell) -> Result<(Report, usize), SearchError> {
        let mut attempts = 0;
        loop {
            let report = self.finder.find_on_grid(self.grid, self.agent, target)?;
            attempts += 1;
            if report.outcome.is_success() || attempts > self.retries {
                return Ok((report, attempts));
            }
        }
    }

    /// Apply `path` one move at a time, checking each destination first.
    fn walk(&mut self, path: &Path) -> Result<(), StopReason> {
        for &mv in path {
            let next = self.agent.step(mv);
            if !self.grid.is_open(next) {
                return Err(StopReason::InvalidMove { at: self.agent, mv });
            }
            self.agent = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch::SearchConfig;

    fn finder(strategy: Strategy) -> Pathfinder {
        Pathfinder::with_config(strategy, SearchConfig::default().with_seed(7))
    }

    #[test]
    fn visits_every_target() {
        let grid = Grid::parse(
            "\
.....
.###.
.....",
        )
        .unwrap();
        let targets = [Cell::new(2, 0), Cell::new(0, 4), Cell::new(2, 4)];
        let mut session = Session::new(&grid, finder(Strategy::AStar), Cell::new(0, 0), 5);
        let summary = session.run(&targets).unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.searches, 3);
        assert_eq!(summary.moves, 2 + 6 + 2);
        assert_eq!(summary.stopped, None);
        assert_eq!(session.agent(), Cell::new(2, 4));
    }

    #[test]
    fn unreachable_target_ends_session_after_retries() {
        let grid = Grid::parse(
            "\
..#..
..#..
..#..",
        )
        .unwrap();
        let targets = [Cell::new(2, 1), Cell::new(0, 4), Cell::new(0, 0)];
        let mut session = Session::new(&grid, finder(Strategy::BreadthFirst), Cell::new(0, 0), 5);
        let summary = session.run(&targets).unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.searches, 1 + 6);
        assert_eq!(
            summary.stopped,
            Some(StopReason::NoRoute {
                from: Cell::new(2, 1),
                to: Cell::new(0, 4)
            })
        );
    }

    #[test]
    fn target_on_agent_scores_without_moving() {
        let grid = Grid::new(3, 3);
        let mut session = Session::new(&grid, finder(Strategy::DepthFirst), Cell::new(1, 1), 0);
        let summary = session.run(&[Cell::new(1, 1)]).unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.moves, 0);
    }

    #[test]
    fn blocked_target_is_an_error() {
        let grid = Grid::parse("..\n.#").unwrap();
        let mut session = Session::new(&grid, finder(Strategy::AStar), Cell::new(0, 0), 5);
        assert!(session.run(&[Cell::new(1, 1)]).is_err());
    }

    #[test]
    fn walk_rejects_moves_into_obstacles() {
        let grid = Grid::parse("..\n.#").unwrap();
        let mut session = Session::new(&grid, finder(Strategy::AStar), Cell::new(0, 1), 5);
        let err = session.walk(&Path::from(vec![Move::Down])).unwrap_err();
        assert_eq!(
            err,
            StopReason::InvalidMove {
                at: Cell::new(0, 1),
                mv: Move::Down
            }
        );
        assert_eq!(session.agent(), Cell::new(0, 1));
    }
}
