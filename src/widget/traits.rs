//! Widget trait: the size-constraint handshake.
//!
//! A widget is laid out once per frame. It reads the frame's constraints,
//! processes the frame's events, pushes strips, and returns the size it
//! actually occupied. [`FnWidget`] adapts a closure so callers can inject
//! content without defining a type.

use crate::geometry::Size;
use crate::render::Frame;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object safe; containers hold their children as `Box<dyn Widget>`.
pub trait Widget {
    /// Type name used in logs and debug output (e.g. "Calendar").
    fn widget_type(&self) -> &str;

    /// Lay out and draw this widget for the current frame.
    ///
    /// The returned size must satisfy `frame.constraints()`.
    fn layout(&mut self, frame: &mut Frame) -> Size;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn widget_type(&self) -> &str {
        (**self).widget_type()
    }

    fn layout(&mut self, frame: &mut Frame) -> Size {
        (**self).layout(frame)
    }
}

// ---------------------------------------------------------------------------
// FnWidget
// ---------------------------------------------------------------------------

/// A widget backed by a layout closure.
pub struct FnWidget<F> {
    name: String,
    f: F,
}

/// Wrap `f` as a widget named `name`.
///
/// ```ignore
/// let filler = from_fn("filler", |frame: &mut Frame| frame.max());
/// ```
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnWidget<F>
where
    F: FnMut(&mut Frame) -> Size,
{
    FnWidget { name: name.into(), f }
}

impl<F> Widget for FnWidget<F>
where
    F: FnMut(&mut Frame) -> Size,
{
    fn widget_type(&self) -> &str {
        &self.name
    }

    fn layout(&mut self, frame: &mut Frame) -> Size {
        (self.f)(frame)
    }
}

impl<F> std::fmt::Debug for FnWidget<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnWidget").field("name", &self.name).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Theme;

    #[test]
    fn fn_widget_reports_name_and_size() {
        let mut calls = 0;
        let mut w = from_fn("probe", |frame: &mut Frame| {
            calls += 1;
            frame.max()
        });
        assert_eq!(w.widget_type(), "probe");
        let mut frame = Frame::new(Size::new(6, 2), Theme::plain());
        assert_eq!(w.layout(&mut frame), Size::new(6, 2));
        drop(w);
        assert_eq!(calls, 1);
    }

    #[test]
    fn boxed_widget_is_object_safe() {
        let mut w: Box<dyn Widget> = Box::new(from_fn("boxed", |_: &mut Frame| Size::new(1, 1)));
        assert_eq!(w.widget_type(), "boxed");
        let mut frame = Frame::new(Size::new(3, 3), Theme::plain());
        assert_eq!(w.layout(&mut frame), Size::new(1, 1));
    }
}
