//! # Command Events
//!
//! Every input event is classified into exactly one of these variants.
//! Commands produce them, and the controller applies them to the ViewModel.
//! Commands suggest, controller decides.

/// What an input event asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// Move the cursor one step
    Navigate { direction: MovementDirection },

    /// Overwrite the selected nibble with a hex digit
    Edit { digit: char },

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Write the buffer back to its file
    Save,

    /// Leave the event loop
    Quit,

    /// Nothing to do; the per-event pipeline still runs
    Ignored,
}

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Left,
    Right,
    Up,
    Down,
}

impl CommandEvent {
    pub fn navigate(direction: MovementDirection) -> Self {
        Self::Navigate { direction }
    }
}
