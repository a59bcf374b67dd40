//! # Viewport Model
//!
//! The window of grid lines currently shown in the hex pane.

use std::ops::RangeInclusive;

use crate::repl::geometry::{Dimensions, GridGeometry};

/// Scroll position and size of the hex pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    scroll_start: usize,
    geometry: GridGeometry,
    height: usize,
}

/// Outcome of a viewport resize, used to decide how much to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeResult {
    pub old_bytes_per_line: usize,
    pub new_bytes_per_line: usize,
    pub changed: bool,
}

impl ViewportState {
    /// Viewport for a pane of `size` screen cells, scrolled to the top
    pub fn new(size: Dimensions) -> Self {
        Self {
            scroll_start: 0,
            geometry: GridGeometry::for_width(size.width),
            height: size.height.max(1),
        }
    }

    pub fn scroll_start(&self) -> usize {
        self.scroll_start
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn bytes_per_line(&self) -> usize {
        self.geometry.bytes_per_line()
    }

    /// Number of visible grid lines
    pub fn height(&self) -> usize {
        self.height
    }

    /// Recompute bytes per line for a new pane size.
    ///
    /// The scroll position is left alone; the next clamp pass reconciles it.
    pub fn resize(&mut self, width: usize, height: usize) -> ResizeResult {
        let old = *self;
        self.geometry = GridGeometry::for_width(width);
        self.height = height.max(1);

        ResizeResult {
            old_bytes_per_line: old.bytes_per_line(),
            new_bytes_per_line: self.bytes_per_line(),
            changed: old.geometry != self.geometry || old.height != self.height,
        }
    }

    pub fn first_visible_byte(&self) -> usize {
        self.geometry.first_byte_of(self.scroll_start)
    }

    /// Last offset on screen, never past the final byte of a `len`-byte buffer
    pub fn last_visible_byte(&self, len: usize) -> usize {
        let last_line = self.scroll_start + self.height - 1;
        self.geometry
            .last_byte_of(last_line)
            .min(len.saturating_sub(1))
    }

    /// Offsets on screen, or `None` when the viewport starts past the end
    pub fn visible_range(&self, len: usize) -> Option<RangeInclusive<usize>> {
        let first = self.first_visible_byte();
        if len == 0 || first >= len {
            return None;
        }
        Some(first..=self.last_visible_byte(len))
    }

    /// Scroll the minimum number of lines so `offset` is visible.
    ///
    /// Same result as stepping one line at a time, computed directly.
    /// Returns true if the scroll position changed.
    pub fn follow(&mut self, offset: usize, len: usize) -> bool {
        let old_start = self.scroll_start;
        let cursor_line = self.geometry.line_of(offset);

        if offset < self.first_visible_byte() {
            self.scroll_start = cursor_line;
        } else if offset > self.last_visible_byte(len) {
            self.scroll_start = (cursor_line + 1).saturating_sub(self.height);
        }

        if old_start != self.scroll_start {
            tracing::debug!(
                "Viewport scrolled from line {} to line {}",
                old_start,
                self.scroll_start
            );
        }
        old_start != self.scroll_start
    }
}
