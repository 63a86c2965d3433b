//! Per-frame input buffer.
//!
//! Terminal events arriving between two frames are mapped and kept in
//! arrival order in a fixed-capacity buffer, so the hot path does not
//! allocate. Key auto-repeat is ignored: holding a lane key must not
//! produce a burst of taps.

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, handle_mouse_event, should_quit};
use crate::types::InputCommand;

/// Commands buffered per frame; extras are dropped.
pub const MAX_PENDING_COMMANDS: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: ArrayVec<InputCommand, MAX_PENDING_COMMANDS>,
    quit: bool,
    dropped: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map one terminal event and buffer the resulting command.
    ///
    /// Returns the command that was buffered, if any.
    pub fn handle_event(&mut self, event: &Event) -> Option<InputCommand> {
        let command = match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                if should_quit(*key) {
                    self.quit = true;
                    return None;
                }
                handle_key_event(*key)
            }
            Event::Mouse(mouse) => handle_mouse_event(*mouse),
            _ => None,
        }?;

        if self.pending.try_push(command).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return None;
        }
        Some(command)
    }

    /// Take every buffered command in arrival order.
    pub fn take(&mut self) -> ArrayVec<InputCommand, MAX_PENDING_COMMANDS> {
        std::mem::take(&mut self.pending)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Commands discarded because the buffer was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
