//! # Cursor Model
//!
//! Nibble-granular cursor: a byte offset plus which hex digit of that byte
//! is selected. Horizontal moves walk digit by digit, vertical moves jump a
//! whole grid line.

/// Which hex digit of a byte the cursor addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nibble {
    /// Upper four bits, the left digit
    #[default]
    High,
    /// Lower four bits, the right digit
    Low,
}

impl Nibble {
    /// Screen column offset of this digit within its hex pair
    pub fn column(self) -> usize {
        match self {
            Nibble::High => 0,
            Nibble::Low => 1,
        }
    }
}

/// Cursor position in the byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorState {
    pub byte_offset: usize,
    pub nibble: Nibble,
}

impl CursorState {
    pub fn new(byte_offset: usize, nibble: Nibble) -> Self {
        Self { byte_offset, nibble }
    }

    /// Step one digit left. At (0, High) the step underflows and the
    /// lower bound clamp keeps the cursor at (0, High).
    pub fn move_left(&mut self) {
        match self.nibble {
            Nibble::Low => self.nibble = Nibble::High,
            Nibble::High => match self.byte_offset.checked_sub(1) {
                Some(offset) => {
                    self.byte_offset = offset;
                    self.nibble = Nibble::Low;
                }
                None => self.clamp_to_start(),
            },
        }
    }

    /// Step one digit right. May leave the cursor one byte past the end;
    /// [`CursorState::clamp_to_buffer`] pulls it back.
    pub fn move_right(&mut self) {
        match self.nibble {
            Nibble::High => self.nibble = Nibble::Low,
            Nibble::Low => {
                self.nibble = Nibble::High;
                self.byte_offset = self.byte_offset.saturating_add(1);
            }
        }
    }

    /// Jump one grid line up; ignored if that would go before the start
    pub fn move_up(&mut self, bytes_per_line: usize) {
        if let Some(offset) = self.byte_offset.checked_sub(bytes_per_line) {
            self.byte_offset = offset;
        }
    }

    /// Jump one grid line down; ignored if that would pass the end
    pub fn move_down(&mut self, bytes_per_line: usize, len: usize) {
        match self.byte_offset.checked_add(bytes_per_line) {
            Some(offset) if offset < len => self.byte_offset = offset,
            _ => {}
        }
    }

    fn clamp_to_start(&mut self) {
        self.byte_offset = 0;
        self.nibble = Nibble::High;
    }

    /// Bound the cursor to an existing byte of a `len`-byte buffer.
    /// Returns true if the cursor had to be moved.
    pub fn clamp_to_buffer(&mut self, len: usize) -> bool {
        if len == 0 {
            self.clamp_to_start();
            return true;
        }
        if self.byte_offset >= len {
            self.byte_offset = len - 1;
            self.nibble = Nibble::Low;
            return true;
        }
        false
    }
}
