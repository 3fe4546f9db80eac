use gridsearch_core::{Move, Path};
use rand::Rng;

use crate::config::DEFAULT_MAX_STEPS;
use crate::outcome::Report;
use crate::problem::Problem;
use crate::traits::Search;

/// Unguided random walk, a control baseline for the real strategies.
///
/// Each of up to `max_steps` iterations draws a uniformly random direction
/// and takes the step only if it lands on an open cell; a rejected draw still
/// uses up its iteration. The walk succeeds the moment it stands on the goal,
/// returning every accepted move, loops included.
#[derive(Debug, Clone)]
pub struct RandomWalk<R> {
    max_steps: usize,
    rng: R,
}

impl<R: Rng> RandomWalk<R> {
    /// Create a walk of at most [`DEFAULT_MAX_STEPS`] iterations.
    pub fn new(rng: R) -> Self {
        Self::with_max_steps(rng, DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(rng: R, max_steps: usize) -> Self {
        Self { max_steps, rng }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl<R: Rng> Search for RandomWalk<R> {
    fn search(&mut self, problem: &Problem<'_>) -> Report {
        if problem.is_trivial() {
            return Report::already_at_goal();
        }

        let mut path = Path::new();
        let mut cur = problem.start();
        for _ in 0..self.max_steps {
            let mv = Move::ALL[self.rng.random_range(0..Move::ALL.len())];
            let next = cur.step(mv);
            if problem.is_open(next) {
                path.push(mv);
                cur = next;
            }
            if cur == problem.goal() {
                let accepted = path.len();
                return Report::found(path, accepted);
            }
        }

        Report::exhausted(path.len())
    }
}
