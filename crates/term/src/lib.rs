//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layout and hit mapping are unit-testable
//! - Map clicks back to track cells with the same geometry used to draw them

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tiles_core as core;
pub use tui_tiles_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Target, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
