//! # Models Module
//!
//! Plain state owned by the editor session: the byte buffer, the cursor,
//! the viewport and the decoded value readout.

pub mod byte_buffer;
pub mod cursor;
pub mod value_inspector;
pub mod viewport;

// Re-export all models for easy access
pub use byte_buffer::ByteBuffer;
pub use cursor::{CursorState, Nibble};
pub use value_inspector::{Endianness, ValueReadout};
pub use viewport::{ResizeResult, ViewportState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::geometry::Dimensions;

    #[test]
    fn all_models_should_create_with_defaults() {
        let _cursor = CursorState::default();
        let _viewport = ViewportState::new(Dimensions::new(48, 5));
        let _endian = Endianness::default();
        let _buffer = ByteBuffer::from_bytes(vec![0]);

        // If we get here without panicking, all models can be created
    }

    #[test]
    fn cursor_should_start_on_first_digit() {
        assert_eq!(CursorState::default(), CursorState::new(0, Nibble::High));
    }
}
