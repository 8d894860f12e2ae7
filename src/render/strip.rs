//! Strip: a horizontal line of styled terminal cells.
//!
//! Widgets emit strips into a [`Frame`](super::frame::Frame) in local
//! coordinates; the frame translates and clips them before handing them to the
//! host's compositor.

use crate::geometry::Offset;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are optional strings the host interprets as named colors or
/// `#rrggbb` hex values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset/false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder pattern).
    pub fn fg(mut self, color: Option<&str>) -> Self {
        self.fg = color.map(str::to_owned);
        self
    }

    /// Set the background color (builder pattern).
    pub fn bg(mut self, color: Option<&str>) -> Self {
        self.bg = color.map(str::to_owned);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank_styled(CellStyle::default())
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled terminal cells.
///
/// Each Strip represents one row (at a given y position) starting at `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// The row this strip occupies.
    pub y: i32,
    /// Starting x position for this strip's cells.
    pub x_offset: i32,
    /// The cells in left-to-right order.
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip at the given row and x offset.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// A strip of `width` copies of `ch`.
    pub fn repeat(y: i32, x_offset: i32, ch: char, width: i32, style: CellStyle) -> Self {
        let mut strip = Self::new(y, x_offset);
        strip.cells = vec![StyledCell::new(ch, style); width.max(0) as usize];
        strip
    }

    /// Push a single character with the given style.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.cells.push(StyledCell::new(ch, style.clone()));
        }
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// The rightmost x position (exclusive) of this strip.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// Move the strip by `offset`.
    pub fn translate(mut self, offset: Offset) -> Strip {
        self.x_offset += offset.x;
        self.y += offset.y;
        self
    }

    /// Crop the strip to only include cells whose x positions fall within
    /// `[x_start, x_end)`. Returns a new Strip.
    pub fn crop(&self, x_start: i32, x_end: i32) -> Strip {
        let mut result = Strip::new(self.y, x_start);
        for (i, cell) in self.cells.iter().enumerate() {
            let cell_x = self.x_offset + i as i32;
            if cell_x >= x_start && cell_x < x_end {
                if result.cells.is_empty() {
                    result.x_offset = cell_x;
                }
                result.cells.push(cell.clone());
            }
        }
        result
    }

    /// Pad the strip to exactly `width` cells using spaces with the given style.
    ///
    /// If the strip is already wider than `width`, it is truncated.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell::blank_styled(style));
        } else {
            self.cells.truncate(w);
        }
    }

    /// The characters of this strip as a string.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red_style() -> CellStyle {
        CellStyle::new().fg(Some("red"))
    }

    #[test]
    fn cell_style_builders() {
        let s = CellStyle::new().fg(Some("red")).bg(None).bold().reverse();
        assert_eq!(s.fg.as_deref(), Some("red"));
        assert!(s.bg.is_none());
        assert!(s.bold && s.reverse);
        assert!(!s.dim);
    }

    #[test]
    fn strip_push_str_and_text() {
        let mut s = Strip::new(0, 0);
        s.push_str("Hello", red_style());
        s.push('!', CellStyle::default());
        assert_eq!(s.width(), 6);
        assert_eq!(s.text(), "Hello!");
        assert_eq!(s.cells[0].style, red_style());
    }

    #[test]
    fn strip_repeat() {
        let s = Strip::repeat(2, 4, '│', 3, red_style());
        assert_eq!(s.text(), "│││");
        assert_eq!(s.right(), 7);
        assert_eq!(Strip::repeat(0, 0, 'x', -2, red_style()).width(), 0);
    }

    #[test]
    fn strip_translate() {
        let s = Strip::new(1, 2).translate(Offset::new(10, 20));
        assert_eq!((s.x_offset, s.y), (12, 21));
    }

    #[test]
    fn strip_crop_with_offset() {
        let mut s = Strip::new(0, 5);
        s.push_str("World", red_style());
        let cropped = s.crop(6, 9);
        assert_eq!(cropped.x_offset, 6);
        assert_eq!(cropped.text(), "orl");
        assert_eq!(s.crop(10, 20).width(), 0);
    }

    #[test]
    fn strip_fill_pads_and_truncates() {
        let mut s = Strip::new(0, 0);
        s.push_str("Hi", red_style());
        s.fill(4, CellStyle::default());
        assert_eq!(s.text(), "Hi  ");
        s.fill(1, CellStyle::default());
        assert_eq!(s.text(), "H");
    }
}
