//! # Terminal Renderer
//!
//! Draws the status line, the hex pane and the boxed detail pane, then
//! parks the terminal cursor on the selected hex digit.
//!
//! ```text
//!           hexitor.bin | 4 bytes | offset 0x00000001 | little-endian
//!
//!           12 f4 56 78
//!              ^ cursor
//!
//!           +--------------------------------+
//!           | Offset: 1 (0x1)                |
//!           | Int8:   -12                    |
//!           ...
//!           +--------------------------------+
//! ```

use crate::config::HEX_PANE_TOP;
use crate::repl::geometry::{Dimensions, Position};
use crate::repl::io::{RenderStream, TerminalSize};
use crate::repl::view_models::ViewModel;
use anyhow::Result;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal: raw mode, alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything from the current session state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Update cursor position only
    fn render_cursor(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Current terminal size as reported by the output device
    fn terminal_size(&self) -> Result<TerminalSize>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Clamp a screen coordinate into the u16 range crossterm expects
fn to_cell(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Terminal-based view renderer over an injected render stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer that owns `render_stream`
    pub fn with_render_stream(render_stream: RS) -> Self {
        Self { render_stream }
    }

    fn print_at(&mut self, position: Position, text: &str) -> Result<()> {
        self.render_stream
            .move_cursor(to_cell(position.col), to_cell(position.row))?;
        self.render_stream.write_all(text.as_bytes())?;
        Ok(())
    }

    fn render_status_line(&mut self, view_model: &ViewModel) -> Result<()> {
        let origin = view_model.layout().hex_origin;
        let row = HEX_PANE_TOP.saturating_sub(2);
        let line = view_model.status_line();
        self.print_at(Position::new(row, origin.col), &line)
    }

    fn render_hex_pane(&mut self, view_model: &ViewModel) -> Result<()> {
        for row in view_model.visible_rows() {
            self.print_at(row.origin, &row.text)?;
        }
        Ok(())
    }

    /// Boxed list of value interpretations at the cursor
    fn render_detail_pane(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = *view_model.layout();
        let Dimensions { width, height } = layout.detail_size;
        if width < 2 || height < 2 {
            return Ok(());
        }

        let inner = width - 2;
        let border = format!("+{}+", "-".repeat(inner));
        let origin = layout.detail_origin;

        self.print_at(origin, &border)?;
        let rows = view_model.value_readout().rows();
        for line in 1..height - 1 {
            let content = rows
                .get(line - 1)
                .map(|(label, value)| format!(" {:<8}{}", format!("{label}:"), value))
                .unwrap_or_default();
            let content: String = content.chars().take(inner).collect();
            self.print_at(
                Position::new(origin.row + line, origin.col),
                &format!("|{content:<inner$}|"),
            )?;
        }
        self.print_at(Position::new(origin.row + height - 1, origin.col), &border)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.clear_screen()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        // Hide cursor before screen refresh to avoid flickering
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        self.render_status_line(view_model)?;
        self.render_hex_pane(view_model)?;
        self.render_detail_pane(view_model)?;

        self.render_cursor(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        let cursor = view_model.screen_cursor();
        self.render_stream
            .move_cursor(to_cell(cursor.col), to_cell(cursor.row))?;
        self.render_stream.show_cursor()?;
        Ok(())
    }

    fn terminal_size(&self) -> Result<TerminalSize> {
        self.render_stream.get_size()
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.flush()?;
        self.render_stream.disable_raw_mode()?;
        Ok(())
    }
}
