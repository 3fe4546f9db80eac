//! Levels and random obstacle layouts.

use std::fmt;
use std::str::FromStr;

use gridsearch_core::{Bounds, Cell, Grid};
use rand::Rng;

/// Obstacle density presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Level0,
    Level1,
    Level2,
    Level3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Level0, Level::Level1, Level::Level2, Level::Level3];

    pub const fn name(self) -> &'static str {
        match self {
            Level::Level0 => "level0",
            Level::Level1 => "level1",
            Level::Level2 => "level2",
            Level::Level3 => "level3",
        }
    }

    /// Percentage of the grid covered by obstacles.
    pub const fn obstacle_percent(self) -> usize {
        match self {
            Level::Level0 => 0,
            Level::Level1 => 5,
            Level::Level2 => 10,
            Level::Level3 => 15,
        }
    }

    /// Number of obstacles placed on a grid of the given size.
    pub const fn obstacle_count(self, bounds: Bounds) -> usize {
        bounds.len() * self.obstacle_percent() / 100
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid level \u{201c}{}\u{201d}, choose from: level0, level1, level2, level3",
            self.0
        )
    }
}

impl std::error::Error for ParseLevelError {}

/// A generated scenario: the obstacle grid, where the agent starts, and the
/// targets it is sent to one after the other.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub agent: Cell,
    pub targets: Vec<Cell>,
}

impl Layout {
    /// Generate a layout for `level`.
    ///
    /// The agent starts at the centre. Obstacles are drawn uniformly,
    /// avoiding the agent and the first target. Every target is an open cell
    /// different from the previous one (or from the agent, for the first).
    ///
    /// `bounds` must hold at least two cells.
    pub fn generate(level: Level, bounds: Bounds, rounds: usize, rng: &mut impl Rng) -> Self {
        let agent = bounds.center();
        let mut grid = Grid::new(bounds.rows, bounds.cols);
        let first = random_open_cell(&grid, agent, rng);

        let free = bounds.len().saturating_sub(2);
        let count = level.obstacle_count(bounds).min(free);
        while grid.obstacles().len() < count {
            let c = random_cell(bounds, rng);
            if c != agent && c != first {
                grid.add_obstacle(c);
            }
        }

        let mut targets = Vec::with_capacity(rounds);
        if rounds > 0 {
            targets.push(first);
        }
        while targets.len() < rounds {
            let prev = targets[targets.len() - 1];
            targets.push(random_open_cell(&grid, prev, rng));
        }

        Self {
            grid,
            agent,
            targets,
        }
    }
}

fn random_cell(bounds: Bounds, rng: &mut impl Rng) -> Cell {
    Cell::new(rng.random_range(0..bounds.rows), rng.random_range(0..bounds.cols))
}

/// A uniformly random open cell other than `avoid`.
fn random_open_cell(grid: &Grid, avoid: Cell, rng: &mut impl Rng) -> Cell {
    loop {
        let c = random_cell(grid.bounds(), rng);
        if c != avoid && grid.is_open(c) {
            return c;
        }
    }
}
