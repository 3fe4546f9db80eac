use gridsearch_core::{Cell, Move};

/// Reusable neighbour buffer for the search loops.
///
/// Enumerates the four orthogonal neighbours of a cell, in [`Move::ALL`]
/// order, filtered by a predicate. The buffer is reused across calls.
pub struct Neighbors {
    buf: Vec<(Move, Cell)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbours of `c` with the move reaching each,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[(Move, Cell)] {
        self.buf.clear();
        for mv in Move::ALL {
            let n = c.step(mv);
            if keep(n) {
                self.buf.push((mv, n));
            }
        }
        &self.buf
    }
}
