//! # Cursor Manager
//!
//! Cursor movement and the clamp pass on the [`ViewModel`].
//!
//! The clamp pass has two phases:
//! 1. bound the cursor to an existing byte
//! 2. scroll the viewport by the fewest lines that bring the cursor on screen

use super::ViewModel;
use crate::repl::commands::MovementDirection;

/// What the clamp pass had to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClampResult {
    pub cursor_clamped: bool,
    pub scrolled: bool,
}

impl ViewModel {
    /// Apply one movement, followed by the clamp pass
    pub fn move_cursor(&mut self, direction: MovementDirection) -> ClampResult {
        match direction {
            MovementDirection::Left => self.cursor.move_left(),
            MovementDirection::Right => self.cursor.move_right(),
            MovementDirection::Up => self.cursor.move_up(self.viewport.bytes_per_line()),
            MovementDirection::Down => self
                .cursor
                .move_down(self.viewport.bytes_per_line(), self.buffer.len()),
        }
        self.clamp()
    }

    pub fn move_cursor_left(&mut self) -> ClampResult {
        self.move_cursor(MovementDirection::Left)
    }

    pub fn move_cursor_right(&mut self) -> ClampResult {
        self.move_cursor(MovementDirection::Right)
    }

    pub fn move_cursor_up(&mut self) -> ClampResult {
        self.move_cursor(MovementDirection::Up)
    }

    pub fn move_cursor_down(&mut self) -> ClampResult {
        self.move_cursor(MovementDirection::Down)
    }

    /// Restore the cursor and viewport invariants.
    ///
    /// Idempotent; safe to run after every event whether or not anything moved.
    pub fn clamp(&mut self) -> ClampResult {
        let len = self.buffer.len();
        let cursor_clamped = self.cursor.clamp_to_buffer(len);
        let scrolled = self.viewport.follow(self.cursor.byte_offset, len);

        ClampResult {
            cursor_clamped,
            scrolled,
        }
    }

    /// True when the cursor byte lies inside the visible range
    pub fn is_cursor_visible(&self) -> bool {
        let offset = self.cursor.byte_offset;
        offset >= self.viewport.first_visible_byte()
            && offset <= self.viewport.last_visible_byte(self.buffer.len())
    }
}
