//! Row module - logical state of one track row
//!
//! A row is a fixed ring slot. It is never freed; recycling overwrites the
//! active column and clears the tapped flag in place.

/// One row of the track.
///
/// Exactly one column is active at any time. `tapped` only moves
/// `false -> true` within a cycle and is cleared when the slot is recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowModel {
    index: usize,
    column_count: usize,
    active_column: usize,
    tapped: bool,
}

impl RowModel {
    /// Create an untapped row with `active_column` as the target.
    ///
    /// `active_column` is clamped into `0..column_count` so the single-active
    /// invariant holds even for a bad caller.
    pub fn new(index: usize, column_count: usize, active_column: usize) -> Self {
        let last = column_count.saturating_sub(1);
        Self {
            index,
            column_count,
            active_column: active_column.min(last),
            tapped: false,
        }
    }

    /// Ring slot this row occupies
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn active_column(&self) -> usize {
        self.active_column
    }

    pub fn tapped(&self) -> bool {
        self.tapped
    }

    pub fn is_active(&self, column: usize) -> bool {
        column == self.active_column
    }

    /// Per-column activity, left to right; exactly one entry is `true`.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.column_count).map(move |c| c == self.active_column)
    }

    /// Mark the current cycle as cleared. Idempotent.
    pub(crate) fn mark_tapped(&mut self) {
        self.tapped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_untapped() {
        let row = RowModel::new(3, 4, 2);
        assert_eq!(row.index(), 3);
        assert_eq!(row.active_column(), 2);
        assert!(!row.tapped());
    }

    #[test]
    fn test_cells_have_exactly_one_active() {
        let row = RowModel::new(0, 5, 4);
        let cells: Vec<bool> = row.cells().collect();
        assert_eq!(cells, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_active_column_is_clamped() {
        let row = RowModel::new(0, 4, 9);
        assert_eq!(row.active_column(), 3);
        assert_eq!(row.cells().filter(|&c| c).count(), 1);
    }

    #[test]
    fn test_mark_tapped_twice_is_same_as_once() {
        let mut once = RowModel::new(1, 4, 0);
        once.mark_tapped();
        let mut twice = RowModel::new(1, 4, 0);
        twice.mark_tapped();
        twice.mark_tapped();
        assert_eq!(once, twice);
        assert!(twice.tapped());
    }
}
