//! Snapshot rendering helpers.
//!
//! Functions for converting rendered widget output (strips) into plain-text
//! strings suitable for snapshot testing and assertions.

use crate::geometry::Size;
use crate::render::strip::Strip;
use crate::render::{Frame, Theme};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Lay out a widget for one frame with no input and return its text.
///
/// The widget gets tight constraints of `width` x `height` and the plain
/// theme. Each row becomes one line in the output string, with trailing
/// spaces trimmed. Lines are separated by `'\n'`.
///
/// # Examples
///
/// ```ignore
/// use gilt_tui_widgets::testing::render_to_string;
/// use gilt_tui_widgets::widgets::Label;
///
/// let output = render_to_string(&mut Label::new("Hello"), 20, 1);
/// assert_eq!(output, "Hello");
/// ```
pub fn render_to_string(widget: &mut dyn Widget, width: i32, height: i32) -> String {
    let mut frame = Frame::new(Size::new(width, height), Theme::plain());
    widget.layout(&mut frame);
    strips_to_string(frame.strips(), width, height)
}

/// Convert raw strips to a plain text string.
///
/// Builds a `width` x `height` grid of spaces, then overlays each strip's cells
/// at the appropriate (x, y) positions in order, so later strips win. Each row
/// is right-trimmed of spaces, and rows are joined with `'\n'`.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let w = width as usize;
    let h = height as usize;

    let mut grid: Vec<Vec<char>> = vec![vec![' '; w]; h];

    for strip in strips {
        let y = strip.y;
        if y < 0 || y >= height {
            continue;
        }
        let row = y as usize;
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if x < 0 || x >= width {
                continue;
            }
            grid[row][x as usize] = cell.ch;
        }
    }

    let lines: Vec<String> = grid
        .into_iter()
        .map(|row| {
            let s: String = row.into_iter().collect();
            s.trim_end().to_owned()
        })
        .collect();

    lines.join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
