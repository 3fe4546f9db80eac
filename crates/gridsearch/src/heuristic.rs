use gridsearch_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-directional unit-cost movement.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Cell::new(1, 7);
        let b = Cell::new(4, 2);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }
}
