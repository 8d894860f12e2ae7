//! Label widget: displays fixed text content.
//!
//! The simplest widget. It renders one or more lines of text within the
//! frame's constraints, in the theme's text style unless overridden.

use crate::geometry::Size;
use crate::render::strip::{CellStyle, Strip};
use crate::render::Frame;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A widget that displays fixed, non-interactive text content.
///
/// Lines are split on `'\n'`. The natural size is the longest line by the
/// number of lines; each line is rendered as one [`Strip`], truncated to the
/// laid-out width, padded to it, and limited to the laid-out height.
///
/// # Examples
///
/// ```ignore
/// let label = Label::new("Hello, world!").centered();
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    content: String,
    style: Option<CellStyle>,
    centered: bool,
}

impl Label {
    /// Create a new `Label` with the given text content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
            centered: false,
        }
    }

    /// Override the theme's text style (builder pattern).
    pub fn style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Center each line horizontally (builder pattern).
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Longest line by line count, in cells.
    pub fn natural_size(&self) -> Size {
        let mut width = 0;
        let mut height = 0;
        for line in self.content.split('\n') {
            width = width.max(line.chars().count() as i32);
            height += 1;
        }
        Size::new(width, height)
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn layout(&mut self, frame: &mut Frame) -> Size {
        let size = frame.constraints().constrain(self.natural_size());
        if size.is_empty() {
            return size;
        }

        let style = self.style.clone().unwrap_or_else(|| frame.theme().text());
        let max_width = size.width as usize;

        for (i, line) in self.content.split('\n').take(size.height as usize).enumerate() {
            let truncated: String = line.chars().take(max_width).collect();
            let pad = if self.centered {
                (size.width - truncated.chars().count() as i32) / 2
            } else {
                0
            };
            let mut strip = Strip::repeat(i as i32, 0, ' ', pad, style.clone());
            strip.push_str(&truncated, style.clone());
            strip.fill(size.width, style.clone());
            frame.push(strip);
        }
        size
    }
}

// ===========================================================================
// Tests
// ===========================================================================
