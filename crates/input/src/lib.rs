//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputCommand`]s and
//! buffers them per frame so the front end can hand them to the game in
//! arrival order. Resolving a lane or a screen position to a concrete
//! `(row, column)` cell is left to the caller, which knows the layout.

pub mod handler;
pub mod map;

pub use tui_tiles_types as types;

pub use handler::{InputHandler, MAX_PENDING_COMMANDS};
pub use map::{handle_key_event, handle_mouse_event, should_quit, LANE_KEYS};
