//! Scroll state for vertical lists.
//!
//! `ScrollState` tracks the first visible row of a list taller than its
//! viewport, clamping every change to the valid range. The calendar's year
//! dropdown uses it to keep the selected year in view.

use std::ops::Range;

// ---------------------------------------------------------------------------
// ScrollState
// ---------------------------------------------------------------------------

/// Scroll position of a list measured in rows.
///
/// The offset is always clamped to `[0, max_scroll]` where
/// `max_scroll = content_len - viewport_len` (clamped to zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// First visible row.
    pub offset: i32,
    /// Total number of rows.
    pub content_len: i32,
    /// Number of rows that fit on screen.
    pub viewport_len: i32,
}

impl ScrollState {
    /// Create a new scroll state with zero offset.
    pub fn new(content_len: i32, viewport_len: i32) -> Self {
        Self {
            offset: 0,
            content_len,
            viewport_len,
        }
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_len - self.viewport_len).max(0)
    }

    /// Scroll to an absolute row, clamping to the valid range.
    pub fn scroll_to(&mut self, offset: i32) {
        self.offset = offset.clamp(0, self.max_scroll());
    }

    /// Scroll by a relative number of rows, clamping to the valid range.
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_to(self.offset + delta);
    }

    /// Scroll so that `row` is visible with `context` rows above it when
    /// possible.
    pub fn reveal(&mut self, row: i32, context: i32) {
        self.scroll_to(row - context);
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_len > self.viewport_len
    }

    /// Rows currently on screen.
    pub fn visible_rows(&self) -> Range<i32> {
        let end = (self.offset + self.viewport_len).min(self.content_len);
        self.offset..end.max(self.offset)
    }

    /// Update the viewport length and re-clamp the offset.
    pub fn set_viewport_len(&mut self, len: i32) {
        self.viewport_len = len.max(0);
        self.scroll_to(self.offset);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
