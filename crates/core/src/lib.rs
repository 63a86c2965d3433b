//! Core game logic - the scroll/recycle engine and the row state machine
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependencies on terminals or input devices, which makes it:
//!
//! - **Deterministic**: the same seed produces the same track
//! - **Testable**: every transition is reachable from plain method calls
//! - **Portable**: any front end that implements [`Renderer`] can drive it
//!
//! # Module Structure
//!
//! - [`row`]: one ring slot (active column, tapped flag)
//! - [`grid`]: the fixed-capacity ring of rows and active-column generation
//! - [`scroll`]: offset advancement and boundary-crossing detection
//! - [`hit`]: tap judging against the grid
//! - [`timer`]: the periodic tick schedule with cancellation tokens
//! - [`event`]: FIFO of ticks and taps resolved in arrival order
//! - [`controller`]: the `Idle -> Running -> GameOver` lifecycle and score
//! - [`render`]: notification surface for front ends
//! - [`config`]: configuration validation and environment overrides
//! - [`snapshot`]: a per-frame copy of the visible track
//!
//! # Example
//!
//! ```
//! use tui_tiles_core::{GameController, TapOutcome, TickOutcome};
//! use tui_tiles_core::types::{GameConfig, Phase};
//!
//! let mut game = GameController::headless(GameConfig::default(), 12345).unwrap();
//! game.start();
//!
//! // Clear the row sitting on the exit boundary.
//! let column = game.grid().row(0).unwrap().active_column();
//! assert!(matches!(game.tap(0, column), TapOutcome::Hit { .. }));
//!
//! // Ten ticks scroll one full row; the cleared row is recycled.
//! for _ in 0..9 {
//!     assert_eq!(game.tick(), TickOutcome::Scrolled);
//! }
//! assert!(matches!(game.tick(), TickOutcome::Recycled { row: 0, .. }));
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! The track moves `step_size` pixels per tick, one tick every
//! `tick_interval_ms`. Call [`GameController::advance`] with elapsed host
//! time, or [`GameController::schedule`] + [`GameController::drain`] to keep
//! ticks ordered with queued taps.

pub mod config;
pub mod controller;
pub mod event;
pub mod grid;
pub mod hit;
pub mod render;
pub mod rng;
pub mod row;
pub mod scroll;
pub mod snapshot;
pub mod timer;

pub use tui_tiles_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigExt};
pub use controller::{EventOutcome, GameController, StartOutcome, TapOutcome, TickOutcome};
pub use event::{EventQueue, GameEvent};
pub use grid::Grid;
pub use hit::{HitTester, MissReason, Verdict};
pub use render::{EventLog, NullRenderer, RenderEvent, Renderer};
pub use rng::SimpleRng;
pub use row::RowModel;
pub use scroll::ScrollEngine;
pub use snapshot::{GameSnapshot, TrackRow};
pub use timer::{TickTimer, TimerToken};
