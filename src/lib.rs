//! # Hexitor - Terminal Hex Editor with Vim-like Navigation
//!
//! Loads a file into memory, shows it as a scrollable grid of hex pairs and
//! lets you overwrite individual nibbles in place.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐   Renders    ┌──────────────┐   Mutates    ┌──────────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────▶│    Models    │
//! │             │              │              │              │              │
//! │ - Hex pane  │              │ - Clamp pass │              │ - ByteBuffer │
//! │ - Details   │              │ - Edit engine│              │ - Cursor     │
//! │ - Cursor    │              │ - Display    │              │ - Viewport   │
//! └─────────────┘              └──────────────┘              └──────────────┘
//!                                      ▲
//!                                      │ CommandEvents
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Key        │
//!                               │   Mapping    │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod repl;

// Re-export main types for easy access
pub use error::HexError;
pub use repl::*;
