//! # ViewModel Module
//!
//! The editor session: one object owning the byte buffer, the cursor and
//! the viewport, passed explicitly to everything that needs them.
//!
//! Every mutating operation ends with the clamp pass so that, between
//! events, the cursor always addresses an existing byte and sits inside
//! the visible range.

pub mod cursor_manager;
pub mod display;
pub mod edit_engine;

use std::path::{Path, PathBuf};

use crate::error::HexError;
use crate::repl::geometry::PaneLayout;
use crate::repl::io::TerminalSize;
use crate::repl::models::{ByteBuffer, CursorState, Endianness, ViewportState};

pub use cursor_manager::ClampResult;
pub use display::HexRow;

/// Editor session state
#[derive(Debug, Clone)]
pub struct ViewModel {
    buffer: ByteBuffer,
    cursor: CursorState,
    viewport: ViewportState,
    layout: PaneLayout,
    terminal_size: TerminalSize,
    endianness: Endianness,
    file_path: Option<PathBuf>,
    status_message: Option<String>,
}

impl ViewModel {
    /// Start a session over `buffer` in a terminal of `terminal_size`
    pub fn new(buffer: ByteBuffer, terminal_size: TerminalSize) -> Self {
        let layout = PaneLayout::for_terminal(terminal_size.0, terminal_size.1);
        Self {
            buffer,
            cursor: CursorState::default(),
            viewport: ViewportState::new(layout.hex_size),
            layout,
            terminal_size,
            endianness: Endianness::default(),
            file_path: None,
            status_message: None,
        }
    }

    /// Remember where the buffer came from so it can be saved back
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Recompute pane layout and grid capacity for a new terminal size.
    ///
    /// Leaves the cursor where it is; the caller runs the clamp pass.
    /// Returns true if anything changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        if self.terminal_size == (width, height) {
            return false;
        }

        self.terminal_size = (width, height);
        self.layout = PaneLayout::for_terminal(width, height);
        let result = self
            .viewport
            .resize(self.layout.hex_size.width, self.layout.hex_size.height);

        tracing::info!(
            "Terminal resized to {}x{}, bytes per line {} -> {}",
            width,
            height,
            result.old_bytes_per_line,
            result.new_bytes_per_line
        );
        true
    }

    /// Write the buffer back to the file it was loaded from
    pub fn save(&mut self) -> Result<(), HexError> {
        let Some(path) = self.file_path.clone() else {
            return Err(HexError::Save {
                path: PathBuf::new(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no file name"),
            });
        };
        self.buffer.flush(&path)
    }
}

#[cfg(test)]
mod tests;
