//! # Edit Engine
//!
//! Nibble overwrite. An accepted digit mutates exactly one byte and
//! advances the cursor one digit; anything else changes nothing.

use super::ViewModel;
use crate::repl::models::byte_buffer::{from_nibbles, hex_to_nibble, high_nibble, low_nibble};
use crate::repl::models::{ByteBuffer, CursorState, Nibble};

/// Replace the nibble under `cursor` with `input` and advance.
///
/// Returns false, touching neither buffer nor cursor, when `input` is not
/// a hex digit or the cursor is off the buffer.
pub fn overwrite_nibble(buffer: &mut ByteBuffer, cursor: &mut CursorState, input: char) -> bool {
    let Some(value) = hex_to_nibble(input) else {
        return false;
    };
    let Some(byte) = buffer.get(cursor.byte_offset) else {
        return false;
    };

    let (high, low) = match cursor.nibble {
        Nibble::High => (value, low_nibble(byte)),
        Nibble::Low => (high_nibble(byte), value),
    };
    buffer.set(cursor.byte_offset, from_nibbles(high, low));

    cursor.move_right();
    cursor.clamp_to_buffer(buffer.len());
    true
}

impl ViewModel {
    /// Overwrite the selected nibble, then run the clamp pass
    pub fn overwrite_nibble(&mut self, input: char) -> bool {
        let offset = self.cursor.byte_offset;
        if !overwrite_nibble(&mut self.buffer, &mut self.cursor, input) {
            tracing::debug!("Ignored non-hex input {:?}", input);
            return false;
        }

        tracing::debug!(
            "Wrote {:?} at offset {}, byte is now {:02x}",
            input,
            offset,
            self.buffer.get(offset).unwrap_or_default()
        );
        self.clamp();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(bytes: &[u8]) -> ByteBuffer {
        ByteBuffer::from_bytes(bytes.to_vec()).unwrap()
    }

    #[test]
    fn overwrite_should_replace_high_nibble() {
        let mut buf = buffer(&[0x00]);
        let mut cursor = CursorState::new(0, Nibble::High);
        assert!(overwrite_nibble(&mut buf, &mut cursor, 'a'));
        assert_eq!(buf.as_slice(), &[0xa0]);
        assert_eq!(cursor, CursorState::new(0, Nibble::Low));
    }

    #[test]
    fn overwrite_should_replace_low_nibble() {
        let mut buf = buffer(&[0x00, 0x00]);
        let mut cursor = CursorState::new(0, Nibble::Low);
        assert!(overwrite_nibble(&mut buf, &mut cursor, 'a'));
        assert_eq!(buf.as_slice(), &[0x0a, 0x00]);
        assert_eq!(cursor, CursorState::new(1, Nibble::High));
    }

    #[test]
    fn overwrite_should_accept_uppercase_digits() {
        let mut buf = buffer(&[0x00]);
        let mut cursor = CursorState::default();
        assert!(overwrite_nibble(&mut buf, &mut cursor, 'F'));
        assert_eq!(buf.as_slice(), &[0xf0]);
    }

    #[test]
    fn overwrite_should_ignore_non_hex_input() {
        let mut buf = buffer(&[0x12, 0x34]);
        let mut cursor = CursorState::new(1, Nibble::High);
        for ch in ['!', 'g', 'z', ' ', '\n'] {
            assert!(!overwrite_nibble(&mut buf, &mut cursor, ch));
        }
        assert_eq!(buf.as_slice(), &[0x12, 0x34]);
        assert_eq!(cursor, CursorState::new(1, Nibble::High));
        assert!(!buf.is_modified());
    }

    #[test]
    fn overwrite_at_last_digit_should_stay_on_last_byte() {
        let mut buf = buffer(&[0x12, 0x34]);
        let mut cursor = CursorState::new(1, Nibble::Low);
        assert!(overwrite_nibble(&mut buf, &mut cursor, '0'));
        assert_eq!(buf.as_slice(), &[0x12, 0x30]);
        assert_eq!(cursor, CursorState::new(1, Nibble::Low));
    }

    #[test]
    fn overwrite_should_refuse_cursor_off_the_buffer() {
        let mut buf = buffer(&[0x12]);
        let mut cursor = CursorState::new(5, Nibble::High);
        assert!(!overwrite_nibble(&mut buf, &mut cursor, 'a'));
        assert_eq!(buf.as_slice(), &[0x12]);
    }
}
