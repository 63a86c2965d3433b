//! Hit testing - judges a tap against the grid
//!
//! Only the active cell of an untapped row is a hit. Everything else,
//! including out-of-range coordinates and a second tap on a cleared row,
//! is a miss.

use crate::grid::Grid;

/// Verdict for a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Hit,
    Miss(MissReason),
}

/// Why a tap missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissReason {
    /// The tapped column is not the row's active column
    WrongColumn,
    /// The row was already cleared this cycle
    AlreadyTapped,
    /// Row or column outside the configured bounds
    OutOfRange,
}

impl MissReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissReason::WrongColumn => "wrong_column",
            MissReason::AlreadyTapped => "already_tapped",
            MissReason::OutOfRange => "out_of_range",
        }
    }
}

impl Verdict {
    pub fn is_hit(&self) -> bool {
        matches!(self, Verdict::Hit)
    }
}

/// Stateless judge over a borrowed grid.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    grid: &'a Grid,
}

impl<'a> HitTester<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Judge a tap at `(row_index, column_index)` against the current row state.
    pub fn evaluate(&self, row_index: usize, column_index: usize) -> Verdict {
        let Some(row) = self.grid.row(row_index) else {
            return Verdict::Miss(MissReason::OutOfRange);
        };
        if column_index >= self.grid.column_count() {
            return Verdict::Miss(MissReason::OutOfRange);
        }
        if row.tapped() {
            return Verdict::Miss(MissReason::AlreadyTapped);
        }
        if !row.is_active(column_index) {
            return Verdict::Miss(MissReason::WrongColumn);
        }
        Verdict::Hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::GameConfig;

    fn grid() -> Grid {
        Grid::new(&GameConfig::default(), SimpleRng::new(2024))
    }

    #[test]
    fn test_active_untapped_is_hit() {
        let g = grid();
        for row in g.rows() {
            assert_eq!(
                HitTester::new(&g).evaluate(row.index(), row.active_column()),
                Verdict::Hit
            );
        }
    }

    #[test]
    fn test_inactive_column_is_miss() {
        let g = grid();
        let row = *g.row(0).unwrap();
        let wrong = (row.active_column() + 1) % g.column_count();
        assert_eq!(
            HitTester::new(&g).evaluate(0, wrong),
            Verdict::Miss(MissReason::WrongColumn)
        );
    }

    #[test]
    fn test_tapped_row_is_miss_even_on_active_column() {
        let mut g = grid();
        let active = g.row(1).unwrap().active_column();
        g.mark_tapped(1);
        assert_eq!(
            HitTester::new(&g).evaluate(1, active),
            Verdict::Miss(MissReason::AlreadyTapped)
        );
    }

    #[test]
    fn test_out_of_range_is_miss() {
        let g = grid();
        let t = HitTester::new(&g);
        assert_eq!(t.evaluate(8, 0), Verdict::Miss(MissReason::OutOfRange));
        assert_eq!(t.evaluate(0, 4), Verdict::Miss(MissReason::OutOfRange));
        assert_eq!(
            t.evaluate(usize::MAX, usize::MAX),
            Verdict::Miss(MissReason::OutOfRange)
        );
    }
}
