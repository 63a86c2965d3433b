//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Track Geometry
//!
//! The playfield is a vertical track of rows scrolling down. Each row has
//! one active column; the track holds more rows than are visible so recycled
//! rows are always off-screen when they are regenerated.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROW_COUNT` | 8 | Logical row slots in the ring |
//! | `DEFAULT_VISIBLE_ROW_COUNT` | 5 | Rows shown at once |
//! | `DEFAULT_COLUMN_COUNT` | 4 | Columns per row |
//! | `DEFAULT_ROW_HEIGHT` | 100 | Row height in logical pixels |
//! | `DEFAULT_STEP_SIZE` | 10 | Scroll distance per tick |
//! | `DEFAULT_TICK_MS` | 50 | Periodic tick interval |
//!
//! With the defaults a row crosses the exit boundary every 10 ticks (500ms).
//!
//! # Examples
//!
//! ```
//! use tui_tiles_types::{GameConfig, Phase};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.ticks_per_row(), 10);
//!
//! assert_eq!(Phase::default(), Phase::Idle);
//! assert!(Phase::Running.is_running());
//! ```

/// Logical row slots in the ring (original game: 8)
pub const DEFAULT_ROW_COUNT: usize = 8;

/// Rows visible on the track at once (original game: 5)
pub const DEFAULT_VISIBLE_ROW_COUNT: usize = 5;

/// Columns per row (original game: 4)
pub const DEFAULT_COLUMN_COUNT: usize = 4;

/// Row height in logical pixels
pub const DEFAULT_ROW_HEIGHT: u32 = 100;

/// Scroll distance per tick in logical pixels
pub const DEFAULT_STEP_SIZE: u32 = 10;

/// Periodic tick interval in milliseconds
pub const DEFAULT_TICK_MS: u32 = 50;

/// Smallest playable column count
pub const MIN_COLUMN_COUNT: usize = 2;

/// Static game configuration.
///
/// Validation lives next to the game logic (`tui_tiles_core::config`); this
/// type only carries the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Logical capacity of the track (ring size), `>= visible_row_count`
    pub row_count: usize,
    /// Columns per row, `>= 2`
    pub column_count: usize,
    /// Rows visible at once, `>= 1`
    pub visible_row_count: usize,
    /// Row height in logical pixels, `> 0`
    pub row_height: u32,
    /// Scroll distance per tick, `0 < step_size <= row_height`
    pub step_size: u32,
    /// Periodic tick interval in milliseconds, `> 0`
    pub tick_interval_ms: u32,
}

impl GameConfig {
    /// Number of ticks needed to scroll one full row (rounded up).
    ///
    /// Returns 0 when `step_size` is 0, which only happens for an invalid config.
    pub fn ticks_per_row(&self) -> u32 {
        if self.step_size == 0 {
            return 0;
        }
        self.row_height.div_ceil(self.step_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            visible_row_count: DEFAULT_VISIBLE_ROW_COUNT,
            row_height: DEFAULT_ROW_HEIGHT,
            step_size: DEFAULT_STEP_SIZE,
            tick_interval_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Game lifecycle phase.
///
/// - **Idle**: waiting for a start; taps are ignored
/// - **Running**: the track scrolls and taps are judged
/// - **GameOver**: terminal until an explicit restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    GameOver,
}

impl Phase {
    /// Lowercase name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "game_over",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// A row-boundary crossing reported by the scroll engine.
///
/// `exiting_index` names the ring slot that just left the visible track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    /// Ring slot that scrolled past the boundary
    pub exiting_index: usize,
    /// Total crossings so far, including this one
    pub rows_crossed: u64,
}

/// Commands produced by the input layer.
///
/// These are what a front end derives from raw terminal events before
/// resolving taps to concrete `(row, column)` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Press the start control
    Start,
    /// Restart after (or during) a game
    Restart,
    /// Tap the given column on the lowest row still awaiting a tap
    TapLane(usize),
    /// Tap at a screen position (terminal column, terminal row)
    TapAt { x: u16, y: u16 },
}
