//! Geometry primitives: [`Cell`] and [`Bounds`].
//!
//! Cells are addressed as `(row, col)`. Rows grow downward, columns grow to
//! the right, and the origin is the top-left corner of the grid.

use std::fmt;
use std::ops::Add;

use crate::moves::Move;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate. Two cells are equal iff both components match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The cell reached by applying `mv` once.
    #[inline]
    pub const fn step(self, mv: Move) -> Self {
        let (drow, dcol) = mv.delta();
        self.shift(drow, dcol)
    }

    /// The four orthogonal neighbours paired with the move that reaches
    /// them, in [`Move::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [(Move, Cell); 4] {
        Move::ALL.map(|mv| (mv, self.step(mv)))
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add<Move> for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Move) -> Self {
        self.step(rhs)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of an implicit grid: `rows × cols` cells anchored at (0, 0).
///
/// A cell is in bounds iff `0 <= row < rows` and `0 <= col < cols`. Bounds
/// with a non-positive dimension are empty and contain no cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Whether the bounds have zero or negative area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `c` is inside the bounds.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// The cell at the middle of the grid (rounded toward the origin).
    #[inline]
    pub const fn center(self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    /// Convert a cell to a row-major flat index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Cell::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Cell;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Cell,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let done = (self.cur.row * self.bounds.cols + self.cur.col) as usize;
        let n = self.bounds.len() - done;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_step_and_add() {
        let c = Cell::new(2, 3);
        assert_eq!(c.step(Move::Up), Cell::new(1, 3));
        assert_eq!(c + Move::Down, Cell::new(3, 3));
        assert_eq!(c + Move::Left, Cell::new(2, 2));
        assert_eq!(c + Move::Right, Cell::new(2, 4));
    }

    #[test]
    fn neighbors_follow_move_order() {
        let n = Cell::new(1, 1).neighbors_4();
        assert_eq!(n[0], (Move::Up, Cell::new(0, 1)));
        assert_eq!(n[1], (Move::Down, Cell::new(2, 1)));
        assert_eq!(n[2], (Move::Left, Cell::new(1, 0)));
        assert_eq!(n[3], (Move::Right, Cell::new(1, 2)));
    }

    #[test]
    fn cell_ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(3, 1) < Cell::new(3, 2));
    }

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds::new(3, 4);
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(2, 3)));
        assert!(!b.contains(Cell::new(3, 0)));
        assert!(!b.contains(Cell::new(0, 4)));
        assert!(!b.contains(Cell::new(-1, 0)));
        assert!(!b.contains(Cell::new(0, -1)));
    }

    #[test]
    fn empty_bounds() {
        assert!(Bounds::new(0, 5).is_empty());
        assert!(Bounds::new(5, -1).is_empty());
        assert_eq!(Bounds::new(0, 5).len(), 0);
        assert_eq!(Bounds::new(0, 5).iter().count(), 0);
        assert!(!Bounds::new(0, 5).contains(Cell::ZERO));
    }

    #[test]
    fn index_round_trip() {
        let b = Bounds::new(4, 7);
        for (i, c) in b.iter().enumerate() {
            assert_eq!(b.index(c), Some(i));
        }
        assert_eq!(b.index(Cell::new(4, 0)), None);
    }

    #[test]
    fn iter_len_and_order() {
        let b = Bounds::new(2, 3);
        let cells: Vec<Cell> = b.into_iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(b.iter().len(), 6);
    }

    #[test]
    fn center_of_odd_and_even() {
        assert_eq!(Bounds::new(25, 25).center(), Cell::new(12, 12));
        assert_eq!(Bounds::new(4, 6).center(), Cell::new(2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, -2).to_string(), "(3, -2)");
        assert_eq!(Bounds::new(5, 8).to_string(), "5x8");
    }
}
