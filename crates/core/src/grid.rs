//! Grid module - fixed-capacity ring of track rows
//!
//! The grid exclusively owns every [`RowModel`]. Rows are addressed by ring
//! slot (`0..row_count`) and regenerated in place, so a recycle never
//! allocates.

use crate::rng::SimpleRng;
use crate::row::RowModel;
use crate::types::GameConfig;

/// The ring of row slots plus the RNG that picks active columns.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<RowModel>,
    column_count: usize,
    visible_row_count: usize,
    rng: SimpleRng,
}

impl Grid {
    /// Build a grid with every slot freshly generated.
    pub fn new(config: &GameConfig, rng: SimpleRng) -> Self {
        let mut grid = Self {
            rows: Vec::with_capacity(config.row_count),
            column_count: config.column_count,
            visible_row_count: config.visible_row_count,
            rng,
        };
        for index in 0..config.row_count {
            let row = grid.generate_row(index);
            grid.rows.push(row);
        }
        grid
    }

    /// Build a row for `index` with one uniformly chosen active column.
    ///
    /// Consecutive rows may repeat the same column.
    pub fn generate_row(&mut self, index: usize) -> RowModel {
        let active = self.rng.next_column(self.column_count);
        RowModel::new(index, self.column_count, active)
    }

    /// Mark the row at `index` as tapped. Out-of-range indices are ignored.
    pub fn mark_tapped(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.mark_tapped();
        }
    }

    /// Regenerate the row at `index`, discarding its active column and tapped flag.
    ///
    /// Callers only recycle a slot that has fully left the visible track.
    /// Returns `None` for an out-of-range index.
    pub fn recycle(&mut self, index: usize) -> Option<RowModel> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.generate_row(index);
        self.rows[index] = row;
        Some(row)
    }

    /// Regenerate every slot (restart path).
    pub fn reset(&mut self) {
        for index in 0..self.rows.len() {
            self.rows[index] = self.generate_row(index);
        }
    }

    pub fn row(&self, index: usize) -> Option<&RowModel> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    /// Ring capacity (`row_count`)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn visible_row_count(&self) -> usize {
        self.visible_row_count
    }

    /// Slot shown `depth` rows above the exit boundary after `rows_crossed` crossings.
    ///
    /// Depth 0 is the next slot to exit.
    pub fn slot_at(&self, rows_crossed: u64, depth: usize) -> usize {
        let len = self.rows.len().max(1) as u64;
        ((rows_crossed % len + depth as u64 % len) % len) as usize
    }

    /// Seed that reproduces the remaining column sequence.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
