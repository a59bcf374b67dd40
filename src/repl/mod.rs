//! # MVVM Architecture Implementation
//!
//! This module contains the hex editor proper.
//! All components are designed with clear separation of concerns and testability.

pub mod commands;
pub mod controllers;
pub mod geometry;
pub mod io;
pub mod models;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use geometry::{Dimensions, GridGeometry, PaneLayout, Position};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandEvent, CommandRegistry, MovementDirection};

// Re-export specific items from models to avoid conflicts
pub use models::{ByteBuffer, CursorState, Endianness, Nibble, ValueReadout, ViewportState};
