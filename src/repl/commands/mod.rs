//! # Command Pattern Implementation
//!
//! Input classification. Each command recognises one family of keys and
//! turns it into a [`CommandEvent`]. The registry asks commands in order and
//! the first relevant one wins; keys nobody claims become
//! [`CommandEvent::Ignored`], so there is no implicit "edit on anything else".
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each command handles one specific action
//! - **Stateless**: Commands only look at the key, never at editor state
//! - **Graceful Ignoring**: Unknown keys are classified, not rejected

use crossterm::event::{Event, KeyEvent, KeyEventKind};

pub mod app;
pub mod editing;
pub mod events;
pub mod movement;

pub use app::{AppTerminateCommand, SaveCommand};
pub use editing::OverwriteNibbleCommand;
pub use events::{CommandEvent, MovementDirection};
pub use movement::{
    MoveCursorDownCommand, MoveCursorLeftCommand, MoveCursorRightCommand, MoveCursorUpCommand,
};

/// A key binding that classifies key presses into command events
pub trait Command {
    /// Check if this command handles the key event
    fn is_relevant(&self, event: &KeyEvent) -> bool;

    /// Produce the command event for a relevant key
    fn execute(&self, event: KeyEvent) -> CommandEvent;

    /// Get a human-readable name for this command (for debugging/logging)
    fn name(&self) -> &'static str;
}

/// Ordered set of commands; the single classification step for all input
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        // Control chords first so Ctrl+C never reaches the hex digit check
        registry.add_command(Box::new(AppTerminateCommand));
        registry.add_command(Box::new(SaveCommand));
        registry.add_command(Box::new(MoveCursorLeftCommand));
        registry.add_command(Box::new(MoveCursorRightCommand));
        registry.add_command(Box::new(MoveCursorUpCommand));
        registry.add_command(Box::new(MoveCursorDownCommand));
        registry.add_command(Box::new(OverwriteNibbleCommand));

        registry
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Get count of registered commands
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Classify a raw terminal event
    pub fn process_event(&self, event: &Event) -> CommandEvent {
        match event {
            Event::Key(key_event) => self.process_key_event(*key_event),
            Event::Resize(width, height) => CommandEvent::Resize {
                width: *width,
                height: *height,
            },
            _ => CommandEvent::Ignored,
        }
    }

    /// Classify a key event using the first relevant command
    pub fn process_key_event(&self, key_event: KeyEvent) -> CommandEvent {
        // Release/repeat reports (Windows, kitty protocol) would double every edit
        if key_event.kind != KeyEventKind::Press {
            return CommandEvent::Ignored;
        }

        for command in &self.commands {
            if command.is_relevant(&key_event) {
                tracing::debug!("Key {:?} handled by {}", key_event.code, command.name());
                return command.execute(key_event);
            }
        }

        tracing::debug!("No command for key {:?}", key_event.code);
        CommandEvent::Ignored
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn registry_should_create_with_default_commands() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.command_count(), 7);
    }

    #[test]
    fn registry_should_classify_navigation_keys() {
        let registry = CommandRegistry::new();
        let cases = [
            (KeyCode::Char('h'), MovementDirection::Left),
            (KeyCode::Left, MovementDirection::Left),
            (KeyCode::Char('l'), MovementDirection::Right),
            (KeyCode::Char('k'), MovementDirection::Up),
            (KeyCode::Down, MovementDirection::Down),
        ];
        for (code, direction) in cases {
            assert_eq!(
                registry.process_event(&press(code)),
                CommandEvent::navigate(direction)
            );
        }
    }

    #[test]
    fn registry_should_classify_hex_digits_as_edits() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.process_event(&press(KeyCode::Char('e'))),
            CommandEvent::Edit { digit: 'e' }
        );
        assert_eq!(
            registry.process_event(&press(KeyCode::Char('7'))),
            CommandEvent::Edit { digit: '7' }
        );
    }

    #[test]
    fn registry_should_ignore_unbound_keys() {
        let registry = CommandRegistry::new();
        for code in [KeyCode::Char('!'), KeyCode::Char('x'), KeyCode::Enter, KeyCode::Esc] {
            assert_eq!(registry.process_event(&press(code)), CommandEvent::Ignored);
        }
        assert_eq!(
            registry.process_event(&Event::FocusGained),
            CommandEvent::Ignored
        );
    }

    #[test]
    fn registry_should_prefer_quit_over_edit_for_ctrl_c() {
        let registry = CommandRegistry::new();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(registry.process_event(&ctrl_c), CommandEvent::Quit);
        assert_eq!(registry.process_event(&press(KeyCode::F(1))), CommandEvent::Quit);
    }

    #[test]
    fn registry_should_turn_resize_into_resize_event() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.process_event(&Event::Resize(100, 30)),
            CommandEvent::Resize {
                width: 100,
                height: 30
            }
        );
    }

    #[test]
    fn registry_should_ignore_key_releases() {
        let registry = CommandRegistry::new();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(registry.process_key_event(release), CommandEvent::Ignored);
    }
}
