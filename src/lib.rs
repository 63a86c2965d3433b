//! TUI Tiles (workspace facade crate).
//!
//! Re-exports the workspace crates under one stable path:
//! `tui_tiles::{core, input, term, types}`. The game logic lives in
//! `crates/core`; the terminal front end in `src/main.rs` is one client of it.

pub use tui_tiles_core as core;
pub use tui_tiles_input as input;
pub use tui_tiles_term as term;
pub use tui_tiles_types as types;
