//! # I/O Abstraction Layer
//!
//! Provides clean trait abstractions for input/output streams to enable
//! dependency injection without polluting production code.
//!
//! ## Design Principles
//!
//! - **EventStream**: Abstracts input events (keyboard, terminal resize)
//! - **RenderStream**: Abstracts output rendering (cursor, screen manipulation)
//! - **Clean Separation**: All terminal-specific code isolated to implementations
//! - **Dependency Injection**: Enables testing without terminal dependencies
//!
//! ## Architecture
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;

pub mod mock;
pub mod terminal;

// Re-export terminal implementations for convenience
pub use terminal::{TerminalEventStream, TerminalRenderStream};

// Re-export mock implementations for testing
pub use mock::{MockEventStream, MockRenderStream, RenderCommand};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
///
/// Production implementations block on crossterm for real terminal input.
/// Test implementations replay a pre-programmed event sequence.
pub trait EventStream {
    /// Block until the next event is available and return it
    fn read(&mut self) -> Result<Event>;

    /// Check if the stream is exhausted (for testing)
    ///
    /// Terminal streams are never exhausted. Test streams report true once
    /// every queued event has been consumed, which ends the event loop.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Output render stream abstraction
///
/// Production implementations use crossterm for real terminal output.
/// Test implementations capture and verify render commands.
pub trait RenderStream: Write {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specific position (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Hide the cursor
    fn hide_cursor(&mut self) -> Result<()>;

    /// Show the cursor
    fn show_cursor(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    /// Enter alternate screen buffer
    fn enter_alternate_screen(&mut self) -> Result<()>;

    /// Leave alternate screen buffer
    fn leave_alternate_screen(&mut self) -> Result<()>;

    /// Enable terminal raw mode
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Disable terminal raw mode
    fn disable_raw_mode(&mut self) -> Result<()>;
}
