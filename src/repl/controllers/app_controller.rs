//! # Application Controller
//!
//! The controller owns the event loop. Each input event goes through the
//! same fixed pipeline before the next one is read:
//!
//! ```text
//! read ──▶ classify ──▶ apply ──▶ resize check ──▶ clamp ──▶ render
//! ```
//!
//! The pipeline runs even when the event changed nothing, so geometry and
//! clamping are always current before a frame is drawn.

use crate::cmd_args::CommandLineArgs;
use crate::repl::{
    commands::{CommandEvent, CommandRegistry},
    io::{EventStream, RenderStream, TerminalSize},
    models::ByteBuffer,
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::Event;

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
    last_polled_size: TerminalSize,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Load the file named on the command line and wire up the I/O streams
    pub fn with_io_streams(
        cmd_args: &CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let buffer = ByteBuffer::open(cmd_args.file())?;
        let size = render_stream.get_size()?;
        let view_model = ViewModel::new(buffer, size)
            .with_file_path(cmd_args.file())
            .with_endianness(cmd_args.endianness());

        Ok(Self::with_view_model(view_model, event_stream, render_stream))
    }

    /// Run an already prepared session (dependency injection for tests)
    pub fn with_view_model(view_model: ViewModel, event_stream: ES, render_stream: RS) -> Self {
        let last_polled_size = view_model.terminal_size();
        Self {
            view_model,
            view_renderer: TerminalRenderer::with_render_stream(render_stream),
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
            last_polled_size,
        }
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop until quit or the input is exhausted
    pub fn run(&mut self) -> Result<()> {
        // Initialize view renderer (handles all terminal setup)
        self.view_renderer.initialize()?;

        let result = self.event_loop();

        // Restore the terminal even if the loop failed
        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        // Initial frame goes through the same reconcile steps as any event
        self.sync_terminal_size()?;
        self.view_model.clamp();
        self.view_renderer.render_full(&self.view_model)?;

        while !self.should_quit && !self.event_stream.is_exhausted() {
            let event = self.event_stream.read()?;
            self.process_event(&event)?;
        }
        Ok(())
    }

    /// Classify and apply one event, then reconcile and redraw
    pub fn process_event(&mut self, event: &Event) -> Result<()> {
        let command_event = self.command_registry.process_event(event);
        tracing::debug!("Input {:?} classified as {:?}", event, command_event);

        self.apply_command_event(command_event);
        if self.should_quit {
            return Ok(());
        }

        self.sync_terminal_size()?;
        let clamp = self.view_model.clamp();
        if clamp.cursor_clamped || clamp.scrolled {
            tracing::debug!("Clamp pass adjusted state: {:?}", clamp);
        }
        self.view_renderer.render_full(&self.view_model)
    }

    /// Apply a classified event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        self.view_model.clear_status_message();

        match event {
            CommandEvent::Navigate { direction } => {
                self.view_model.move_cursor(direction);
            }
            CommandEvent::Edit { digit } => {
                self.view_model.overwrite_nibble(digit);
            }
            CommandEvent::Resize { width, height } => {
                self.view_model.update_terminal_size(width, height);
            }
            CommandEvent::Save => match self.view_model.save() {
                Ok(()) => {
                    let message = format!("Saved {} bytes", self.view_model.buffer().len());
                    self.view_model.set_status_message(message);
                }
                Err(e) => {
                    tracing::warn!("Save failed: {}", e);
                    self.view_model.set_status_message(e.to_string());
                }
            },
            CommandEvent::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            CommandEvent::Ignored => {}
        }
    }

    /// Pick up terminal size changes that arrived without a resize event.
    ///
    /// Only a change since the previous poll counts, so an explicit resize
    /// event is never overridden by a stale device size.
    fn sync_terminal_size(&mut self) -> Result<()> {
        let size = self.view_renderer.terminal_size()?;
        if size != self.last_polled_size {
            self.last_polled_size = size;
            self.view_model.update_terminal_size(size.0, size.1);
        }
        Ok(())
    }
}
