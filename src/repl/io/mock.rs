//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of EventStream and RenderStream traits
//! for testing without terminal dependencies.
//!
//! `MockRenderStream` also keeps a tiny character grid so tests can assert
//! on what ended up at which screen cell, not just on raw bytes.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// Mock event stream for testing
///
/// Replays pre-programmed events, then reports itself exhausted.
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug, Default)]
struct MockTerminalState {
    commands: Vec<RenderCommand>,
    size: TerminalSize,
    cursor: (u16, u16),
    screen: Vec<Vec<char>>,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockTerminalState {
    fn blank_screen(&mut self) {
        let (width, height) = self.size;
        self.screen = vec![vec![' '; width as usize]; height as usize];
    }

    fn put_text(&mut self, text: &str) {
        for ch in text.chars() {
            let (x, y) = self.cursor;
            if let Some(cell) = self
                .screen
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = ch;
            }
            self.cursor.0 = x.saturating_add(1);
        }
    }
}

/// Mock render stream for testing
///
/// Clones share state, so a test can keep a handle while the controller
/// owns the stream.
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    state: Arc<Mutex<MockTerminalState>>,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        let mut state = MockTerminalState {
            size,
            cursor_visible: true,
            ..MockTerminalState::default()
        };
        state.blank_screen();
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockTerminalState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Simulate the user resizing the terminal window
    pub fn set_size(&self, size: TerminalSize) {
        let mut state = self.lock();
        state.size = size;
        state.blank_screen();
    }

    /// Get recorded commands for verification
    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    /// Clear recorded commands
    pub fn clear_commands(&self) {
        self.lock().commands.clear();
    }

    /// Check if a specific command was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    /// Text currently shown on `row`, trailing blanks trimmed
    pub fn screen_line(&self, row: usize) -> String {
        self.lock()
            .screen
            .get(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Whole screen as newline-separated rows
    pub fn screen_text(&self) -> String {
        let rows = self.lock().screen.len();
        (0..rows)
            .map(|row| self.screen_line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Last cursor position set through `move_cursor` or advanced by writes
    pub fn cursor_position(&self) -> (u16, u16) {
        self.lock().cursor
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.lock().cursor_visible
    }

    pub fn is_raw_mode(&self) -> bool {
        self.lock().raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.lock().alternate_screen
    }

    fn record(&self, command: RenderCommand) {
        self.lock().commands.push(command);
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut state = self.lock();
        state.put_text(&String::from_utf8_lossy(buf));
        state.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::ClearScreen);
        state.blank_screen();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::MoveCursor(x, y));
        state.cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::HideCursor);
        state.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::ShowCursor);
        state.cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.lock().size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::EnterAlternateScreen);
        state.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::LeaveAlternateScreen);
        state.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::EnableRawMode);
        state.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.commands.push(RenderCommand::DisableRawMode);
        state.raw_mode = false;
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
