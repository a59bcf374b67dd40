//! # Geometry Types
//!
//! Screen positions, pane dimensions and the byte grid mapping.
//!
//! The grid maps a linear byte offset onto `(line, column)` coordinates.
//! Every byte takes three screen columns: two hex digits and a separator.
//!
//! ```text
//! offset:   0  1  2  3  4  5  6  7        bytes_per_line = 4
//!          ┌───────────┐
//! line 0   │00 01 02 03│
//! line 1   │04 05 06 07│
//!          └───────────┘
//!           ^  ^
//!           col 0, col 3
//! ```

use crate::config::{
    DETAIL_PANE_GAP, DETAIL_PANE_HEIGHT, HEX_PANE_LEFT, HEX_PANE_TOP, HORIZONTAL_MARGIN,
};

/// Screen columns occupied by one rendered byte ("ff ")
pub const COLUMNS_PER_BYTE: usize = 3;

/// A position in 2D space with row and column coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Dimensions representing width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Stateless mapping between byte offsets and grid coordinates.
///
/// Functions are total: callers clamp the results against the buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    bytes_per_line: usize,
}

impl GridGeometry {
    /// Create a grid with the given capacity, forcing at least one byte per line
    pub fn new(bytes_per_line: usize) -> Self {
        Self {
            bytes_per_line: bytes_per_line.max(1),
        }
    }

    /// Derive the grid from a pane width in screen columns
    pub fn for_width(width: usize) -> Self {
        Self::new(width / COLUMNS_PER_BYTE)
    }

    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Grid line holding `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        offset / self.bytes_per_line
    }

    /// Screen column of the first hex digit of `offset`, relative to the pane
    pub fn column_of(&self, offset: usize) -> usize {
        (offset % self.bytes_per_line) * COLUMNS_PER_BYTE
    }

    pub fn first_byte_of(&self, line: usize) -> usize {
        line * self.bytes_per_line
    }

    /// Last offset of `line`, regardless of buffer length
    pub fn last_byte_of(&self, line: usize) -> usize {
        self.first_byte_of(line + 1) - 1
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Placement of the hex and detail panes for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub hex_origin: Position,
    pub hex_size: Dimensions,
    pub detail_origin: Position,
    pub detail_size: Dimensions,
}

impl PaneLayout {
    /// Lay out both panes inside a `width` x `height` terminal.
    ///
    /// The hex pane never collapses below one row of one byte; on tiny
    /// terminals the panes simply run off-screen.
    pub fn for_terminal(width: u16, height: u16) -> Self {
        let width = width as usize;
        let height = height as usize;

        let pane_width = width.saturating_sub(HORIZONTAL_MARGIN);
        let hex_height = height
            .saturating_sub(HEX_PANE_TOP + DETAIL_PANE_GAP + DETAIL_PANE_HEIGHT + 1)
            .max(1);
        let hex_origin = Position::new(HEX_PANE_TOP, HEX_PANE_LEFT);
        let hex_size = Dimensions::new(pane_width.max(COLUMNS_PER_BYTE), hex_height);

        Self {
            hex_origin,
            hex_size,
            detail_origin: Position::new(
                HEX_PANE_TOP + hex_height + DETAIL_PANE_GAP,
                HEX_PANE_LEFT,
            ),
            detail_size: Dimensions::new(pane_width, DETAIL_PANE_HEIGHT),
        }
    }
}
