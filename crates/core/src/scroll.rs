//! Scroll engine - advances the track and reports row-boundary crossings
//!
//! The engine only measures distance. It does not know whether a crossing
//! ends the game or recycles a row; the controller decides that against the
//! exiting row's tapped flag.
//!
//! `step_size <= row_height` is a configuration precondition, so a single
//! tick produces at most one crossing.

use tracing::trace;

use crate::types::{Crossing, GameConfig};

#[derive(Debug, Clone)]
pub struct ScrollEngine {
    offset: u32,
    rows_crossed: u64,
    padding_bottom: u64,
    step_size: u32,
    row_height: u32,
    row_count: usize,
}

impl ScrollEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            offset: 0,
            rows_crossed: 0,
            padding_bottom: 0,
            step_size: config.step_size,
            row_height: config.row_height,
            row_count: config.row_count,
        }
    }

    /// Advance by one step and report the crossing, if any.
    ///
    /// A crossing happens exactly when `offset >= row_height * (rows_crossed + 1)`.
    pub fn tick(&mut self) -> Option<Crossing> {
        self.offset = self.offset.saturating_add(self.step_size);

        let boundary = (self.row_height as u64) * (self.rows_crossed + 1);
        if self.total_offset() < boundary {
            return None;
        }

        self.rows_crossed += 1;
        self.padding_bottom = (self.row_height as u64) * self.rows_crossed;
        let exiting_index = ((self.rows_crossed - 1) % self.row_count.max(1) as u64) as usize;
        trace!(
            rows_crossed = self.rows_crossed,
            exiting_index,
            "row crossed exit boundary"
        );

        // Fold whole rows out of the stored offset so it never overflows on
        // long sessions; `total_offset` keeps the cumulative value.
        self.offset -= self.row_height;

        Some(Crossing {
            exiting_index,
            rows_crossed: self.rows_crossed,
        })
    }

    /// Cumulative distance scrolled.
    pub fn offset(&self) -> u64 {
        self.total_offset()
    }

    fn total_offset(&self) -> u64 {
        self.padding_bottom + self.offset as u64
    }

    pub fn rows_crossed(&self) -> u64 {
        self.rows_crossed
    }

    /// Cumulative padding applied once per crossing (`row_height * rows_crossed`).
    ///
    /// Renderers add this below the track so the recycled row reappears at
    /// the top without a visual jump.
    pub fn padding_bottom(&self) -> u64 {
        self.padding_bottom
    }

    /// Distance into the current row, in `0..row_height`.
    pub fn sub_row_offset(&self) -> u32 {
        self.offset
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn ticks_per_row(&self) -> u32 {
        if self.step_size == 0 {
            return 0;
        }
        self.row_height.div_ceil(self.step_size)
    }

    /// Rewind to the initial position.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.rows_crossed = 0;
        self.padding_bottom = 0;
    }
}
