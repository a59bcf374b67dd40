//! # Display Data
//!
//! Everything the renderer needs, derived from the session on demand:
//! visible hex rows, on-screen cursor, detail readout and status text.

use super::ViewModel;
use crate::repl::geometry::Position;
use crate::repl::models::byte_buffer::byte_to_hex;
use crate::repl::models::ValueReadout;

/// One rendered line of the hex pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexRow {
    /// Absolute screen position of the first hex digit
    pub origin: Position,
    /// Offset of the first byte on this line
    pub first_offset: usize,
    /// Hex pairs, each followed by a space, e.g. "12 34 "
    pub text: String,
}

impl ViewModel {
    /// Hex pane lines for the currently visible byte range
    pub fn visible_rows(&self) -> Vec<HexRow> {
        let Some(range) = self.viewport.visible_range(self.buffer.len()) else {
            return Vec::new();
        };
        let geometry = self.viewport.geometry();
        let scroll_start = self.viewport.scroll_start();
        let origin = self.layout.hex_origin;

        let mut rows: Vec<HexRow> = Vec::with_capacity(self.viewport.height());
        for offset in range {
            let Some(byte) = self.buffer.get(offset) else {
                break;
            };
            let line = geometry.line_of(offset) - scroll_start;

            if geometry.column_of(offset) == 0 || rows.is_empty() {
                rows.push(HexRow {
                    origin: Position::new(origin.row + line, origin.col),
                    first_offset: offset,
                    text: String::with_capacity(geometry.bytes_per_line() * 3),
                });
            }
            if let Some(row) = rows.last_mut() {
                row.text.push_str(&byte_to_hex(byte));
                row.text.push(' ');
            }
        }
        rows
    }

    /// Absolute screen cell of the selected hex digit
    pub fn screen_cursor(&self) -> Position {
        let geometry = self.viewport.geometry();
        let offset = self.cursor.byte_offset;
        let origin = self.layout.hex_origin;

        Position::new(
            origin.row + geometry.line_of(offset).saturating_sub(self.viewport.scroll_start()),
            origin.col + geometry.column_of(offset) + self.cursor.nibble.column(),
        )
    }

    /// Integer interpretations at the cursor for the detail pane
    pub fn value_readout(&self) -> ValueReadout {
        ValueReadout::at(&self.buffer, self.cursor.byte_offset, self.endianness)
    }

    /// One-line summary: file, size, cursor offset, modified marker, message
    pub fn status_line(&self) -> String {
        let name = self
            .file_path
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[buffer]".to_string());
        let modified = if self.buffer.is_modified() { " [+]" } else { "" };

        let mut line = format!(
            "{}{} | {} bytes | offset 0x{:08x} | {}",
            name,
            modified,
            self.buffer.len(),
            self.cursor.byte_offset,
            self.endianness
        );
        if let Some(message) = &self.status_message {
            line.push_str(" | ");
            line.push_str(message);
        }
        line
    }
}
