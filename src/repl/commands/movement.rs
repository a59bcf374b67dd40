//! # Movement Commands
//!
//! Cursor movement across the hex grid. Both arrow keys and the vim keys
//! `h j k l` (either case) are accepted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandEvent, MovementDirection};

/// Plain key press: no modifier, or only Shift for the uppercase vim keys
fn is_unmodified(event: &KeyEvent) -> bool {
    (event.modifiers - KeyModifiers::SHIFT).is_empty()
}

/// Move cursor one nibble left (h, H, Left arrow)
pub struct MoveCursorLeftCommand;

impl Command for MoveCursorLeftCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('h' | 'H') | KeyCode::Left) && is_unmodified(event)
    }

    fn execute(&self, _event: KeyEvent) -> CommandEvent {
        CommandEvent::navigate(MovementDirection::Left)
    }

    fn name(&self) -> &'static str {
        "MoveCursorLeft"
    }
}

/// Move cursor one nibble right (l, L, Right arrow)
pub struct MoveCursorRightCommand;

impl Command for MoveCursorRightCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('l' | 'L') | KeyCode::Right) && is_unmodified(event)
    }

    fn execute(&self, _event: KeyEvent) -> CommandEvent {
        CommandEvent::navigate(MovementDirection::Right)
    }

    fn name(&self) -> &'static str {
        "MoveCursorRight"
    }
}

/// Move cursor one grid line up (k, K, Up arrow)
pub struct MoveCursorUpCommand;

impl Command for MoveCursorUpCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('k' | 'K') | KeyCode::Up) && is_unmodified(event)
    }

    fn execute(&self, _event: KeyEvent) -> CommandEvent {
        CommandEvent::navigate(MovementDirection::Up)
    }

    fn name(&self) -> &'static str {
        "MoveCursorUp"
    }
}

/// Move cursor one grid line down (j, J, Down arrow)
pub struct MoveCursorDownCommand;

impl Command for MoveCursorDownCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('j' | 'J') | KeyCode::Down) && is_unmodified(event)
    }

    fn execute(&self, _event: KeyEvent) -> CommandEvent {
        CommandEvent::navigate(MovementDirection::Down)
    }

    fn name(&self) -> &'static str {
        "MoveCursorDown"
    }
}
