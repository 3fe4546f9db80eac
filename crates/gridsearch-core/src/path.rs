//! Paths: ordered sequences of [`Move`]s applied from a start cell.

use std::collections::HashSet;
use std::fmt;

use crate::geom::{Bounds, Cell};
use crate::moves::Move;

/// An ordered sequence of moves, interpreted from some start cell.
///
/// The empty path carries no information on its own: it is what a search
/// returns both when no route exists and when start and goal coincide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    moves: Vec<Move>,
}

impl Path {
    /// Create an empty path.
    #[inline]
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// The moves of the path, in order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append a move.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Iterate over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The cells entered by each move when walking the path from `start`.
    ///
    /// `start` itself is not yielded, so the iterator has exactly
    /// [`len`](Self::len) items and its last item is the end cell.
    #[inline]
    pub fn trajectory(&self, start: Cell) -> Trajectory<'_> {
        Trajectory {
            moves: self.moves.iter(),
            cur: start,
        }
    }

    /// The cell reached after applying every move to `start`.
    pub fn end(&self, start: Cell) -> Cell {
        self.moves.iter().fold(start, |c, &mv| c.step(mv))
    }

    /// Whether every cell entered from `start` is in bounds and not an
    /// obstacle.
    pub fn is_walkable(&self, start: Cell, bounds: Bounds, obstacles: &HashSet<Cell>) -> bool {
        self.trajectory(start)
            .all(|c| bounds.contains(c) && !obstacles.contains(&c))
    }
}

impl From<Vec<Move>> for Path {
    #[inline]
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl From<Path> for Vec<Move> {
    #[inline]
    fn from(p: Path) -> Self {
        p.moves
    }
}

impl FromIterator<Move> for Path {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        f.write_str("]")
    }
}

/// Iterator over the cells entered while walking a [`Path`].
#[derive(Clone, Debug)]
pub struct Trajectory<'a> {
    moves: std::slice::Iter<'a, Move>,
    cur: Cell,
}

impl Iterator for Trajectory<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let &mv = self.moves.next()?;
        self.cur = self.cur.step(mv);
        Some(self.cur)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

impl ExactSizeIterator for Trajectory<'_> {}
