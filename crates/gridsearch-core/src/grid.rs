//! Owned obstacle grids.

use std::collections::HashSet;
use std::fmt;

use crate::geom::{Bounds, Cell};
use crate::moves::Move;

/// Character for a blocked cell in the textual grid format.
pub const OBSTACLE: char = '#';
/// Character for an open cell in the textual grid format.
pub const OPEN: char = '.';

/// Grid bounds together with the set of blocked cells.
///
/// Obstacles are always in bounds: [`add_obstacle`](Self::add_obstacle)
/// ignores cells outside the grid, and so does deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "GridRepr"))]
pub struct Grid {
    bounds: Bounds,
    obstacles: HashSet<Cell>,
}

/// Unchecked serialized form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    bounds: Bounds,
    obstacles: HashSet<Cell>,
}

#[cfg(feature = "serde")]
impl From<GridRepr> for Grid {
    fn from(repr: GridRepr) -> Self {
        Self::with_obstacles(repr.bounds.rows, repr.bounds.cols, repr.obstacles)
    }
}

impl Grid {
    /// Create an obstacle-free grid of `rows × cols` cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            bounds: Bounds::new(rows, cols),
            obstacles: HashSet::new(),
        }
    }

    /// Create a grid with the given obstacles. Out-of-bounds cells are
    /// dropped.
    pub fn with_obstacles(rows: i32, cols: i32, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        let mut grid = Self::new(rows, cols);
        for c in obstacles {
            grid.add_obstacle(c);
        }
        grid
    }

    /// Parse a grid from text.
    ///
    /// Each line is a row; `#` marks an obstacle and `.` an open cell. All
    /// lines must have the same width. Leading and trailing whitespace of
    /// the whole string is trimmed, as is each line.
    pub fn parse(s: &str) -> Result<Self, GridParseError> {
        let mut obstacles = HashSet::new();
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (row, line) in s.trim().lines().enumerate() {
            let line = line.trim();
            let mut w = 0;
            for (col, ch) in line.chars().enumerate() {
                let c = Cell::new(row as i32, col as i32);
                match ch {
                    OBSTACLE => {
                        obstacles.insert(c);
                    }
                    OPEN => {}
                    _ => return Err(GridParseError::InvalidChar { ch, cell: c }),
                }
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridParseError::InconsistentWidth {
                        row: row as i32,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Ok(Self {
            bounds: Bounds::new(rows, width.unwrap_or(0) as i32),
            obstacles,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// The blocked cells.
    #[inline]
    pub fn obstacles(&self) -> &HashSet<Cell> {
        &self.obstacles
    }

    /// Block `c`. Returns `true` if the cell was in bounds and previously
    /// open.
    pub fn add_obstacle(&mut self, c: Cell) -> bool {
        if !self.bounds.contains(c) {
            return false;
        }
        self.obstacles.insert(c)
    }

    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.obstacles.contains(&c)
    }

    /// Whether `c` is in bounds and not an obstacle.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.bounds.contains(c) && !self.obstacles.contains(&c)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.bounds.len().saturating_sub(self.obstacles.len())
    }

    /// Open orthogonal neighbours of `c`, in [`Move::ALL`] order.
    pub fn open_neighbors(&self, c: Cell) -> impl Iterator<Item = (Move, Cell)> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |&(_, n)| self.is_open(n))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.bounds.rows {
            for col in 0..self.bounds.cols {
                let ch = if self.is_blocked(Cell::new(row, col)) {
                    OBSTACLE
                } else {
                    OPEN
                };
                write!(f, "{ch}")?;
            }
            if row + 1 < self.bounds.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a textual grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// A line's width differs from the first line's.
    InconsistentWidth {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, cell: Cell },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}
