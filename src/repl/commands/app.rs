//! # Application Control Commands
//!
//! Commands for controlling the application lifecycle: quit and save.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandEvent};

/// Terminate application (F1 or Ctrl+C)
pub struct AppTerminateCommand;

impl Command for AppTerminateCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::F(1))
            || (matches!(event.code, KeyCode::Char('c'))
                && event.modifiers.contains(KeyModifiers::CONTROL))
    }

    fn execute(&self, _event: KeyEvent) -> CommandEvent {
        CommandEvent::Quit
    }

    fn name(&self) -> &'static str {
        "AppTerminate"
    }
}

/// Write the buffer back to disk (Ctrl+S)
pub struct SaveCommand;

impl Command for SaveCommand {
    fn is_relevant(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('s')) && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent) -> CommandEvent {
        CommandEvent::Save
    }

    fn name(&self) -> &'static str {
        "Save"
    }
}
