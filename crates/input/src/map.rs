//! Key and mouse mapping from terminal events to input commands.

use crate::types::InputCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Home-row lane keys, left to right.
pub const LANE_KEYS: [char; 4] = ['d', 'f', 'j', 'k'];

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Start)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),

        // Lanes: home row, then digits for wider tracks.
        KeyCode::Char(c) => lane_for_char(c).map(InputCommand::TapLane),

        _ => None,
    }
}

fn lane_for_char(c: char) -> Option<usize> {
    let lower = c.to_ascii_lowercase();
    if let Some(lane) = LANE_KEYS.iter().position(|&k| k == lower) {
        return Some(lane);
    }
    match c {
        '1'..='9' => Some((c as u8 - b'1') as usize),
        _ => None,
    }
}

/// Map a mouse event to a positional tap. Only left-button presses count.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputCommand> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputCommand::TapAt {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
