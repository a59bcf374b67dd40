//! # Editing Commands
//!
//! Hex digit keys overwrite the nibble under the cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandEvent};

/// Overwrite the selected nibble (0-9, a-f, A-F)
pub struct OverwriteNibbleCommand;

impl Command for OverwriteNibbleCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char(ch) => {
                !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && ch.is_ascii_hexdigit()
            }
            _ => false,
        }
    }

    fn execute(&self, event: KeyEvent) -> CommandEvent {
        match event.code {
            KeyCode::Char(digit) => CommandEvent::Edit { digit },
            _ => CommandEvent::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "OverwriteNibble"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ch: char, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), modifiers)
    }

    #[test]
    fn overwrite_should_be_relevant_for_hex_digits_only() {
        let cmd = OverwriteNibbleCommand;
        for ch in ['0', '9', 'a', 'f', 'A', 'F'] {
            assert!(cmd.is_relevant(&key(ch, KeyModifiers::NONE)), "{ch}");
        }
        for ch in ['g', 'z', '!', ' ', 'q'] {
            assert!(!cmd.is_relevant(&key(ch, KeyModifiers::NONE)), "{ch}");
        }
    }

    #[test]
    fn overwrite_should_ignore_control_chords() {
        let cmd = OverwriteNibbleCommand;
        assert!(!cmd.is_relevant(&key('a', KeyModifiers::CONTROL)));
        assert!(!cmd.is_relevant(&key('a', KeyModifiers::ALT)));
        assert!(cmd.is_relevant(&key('A', KeyModifiers::SHIFT)));
    }

    #[test]
    fn overwrite_should_carry_the_typed_digit() {
        let event = OverwriteNibbleCommand.execute(key('B', KeyModifiers::SHIFT));
        assert_eq!(event, CommandEvent::Edit { digit: 'B' });
    }
}
