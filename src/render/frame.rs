//! Frame: one immediate-mode layout pass.
//!
//! A `Frame` is what a widget sees during [`Widget::layout`](crate::widget::Widget::layout):
//! the constraints it must fit in, the input events delivered this frame, the
//! theme, and a sink for the strips it draws. Child layout narrows the origin,
//! constraints and clip region for the duration of a closure and restores them
//! afterwards.

use crate::event::input::{InputEvent, MouseEvent};
use crate::geometry::{Constraints, Offset, Region, Size};

use super::strip::Strip;
use super::theme::Theme;

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Frame {
    constraints: Constraints,
    /// Absolute position of the current local origin.
    origin: Offset,
    /// Absolute clip rectangle; strips outside it are cropped away.
    clip: Region,
    theme: Theme,
    events: Vec<InputEvent>,
    strips: Vec<Strip>,
    invalidated: bool,
    recording: usize,
}

impl Frame {
    /// A frame covering `size` cells with tight constraints.
    pub fn new(size: Size, theme: Theme) -> Self {
        Self {
            constraints: Constraints::tight(size),
            origin: Offset::default(),
            clip: size.to_region(),
            theme,
            events: Vec::new(),
            strips: Vec::new(),
            invalidated: false,
            recording: 0,
        }
    }

    /// Attach this frame's input events (builder pattern).
    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.events.extend(events);
        self
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    /// Largest size the current widget may occupy.
    pub fn max(&self) -> Size {
        self.constraints.max
    }

    pub fn origin(&self) -> Offset {
        self.origin
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Input events for this frame. Empty while recording a probe.
    pub fn events(&self) -> &[InputEvent] {
        if self.recording > 0 {
            &[]
        } else {
            &self.events
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording > 0
    }

    /// Position of a mouse event relative to the current origin.
    pub fn to_local(&self, event: &MouseEvent) -> Offset {
        event.position() - self.origin
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    pub fn into_strips(self) -> Vec<Strip> {
        self.strips
    }

    // ── Output ───────────────────────────────────────────────────────

    /// Emit a strip in local coordinates.
    ///
    /// The strip is moved to absolute coordinates and cropped to the clip
    /// region. Nothing is kept while recording.
    pub fn push(&mut self, strip: Strip) {
        if self.recording > 0 {
            return;
        }
        let strip = strip.translate(self.origin);
        if strip.y < self.clip.y || strip.y >= self.clip.bottom() {
            return;
        }
        let cropped = strip.crop(self.clip.x, self.clip.right());
        if cropped.width() > 0 {
            self.strips.push(cropped);
        }
    }

    /// Ask the host to run another frame.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    // ── Child layout ─────────────────────────────────────────────────

    /// Run `f` inside `region` (local coordinates) with tight constraints of
    /// the region's size.
    pub fn layout_in<R>(&mut self, region: Region, f: impl FnOnce(&mut Frame) -> R) -> R {
        let saved = (self.origin, self.constraints, self.clip);
        let absolute = region.translate(self.origin);
        self.origin = absolute.offset();
        self.constraints = Constraints::tight(Size::new(region.width.max(0), region.height.max(0)));
        self.clip = self.clip.intersection(absolute);
        let result = f(self);
        (self.origin, self.constraints, self.clip) = saved;
        result
    }

    /// Run `f` with `constraints` in place of the current ones.
    pub fn with_constraints<R>(
        &mut self,
        constraints: Constraints,
        f: impl FnOnce(&mut Frame) -> R,
    ) -> R {
        let saved = self.constraints;
        self.constraints = constraints;
        let result = f(self);
        self.constraints = saved;
        result
    }

    /// Run `f` as an offscreen probe: its strips are discarded and it sees no
    /// events. Used to measure a widget's natural size.
    pub fn record<R>(&mut self, f: impl FnOnce(&mut Frame) -> R) -> R {
        self.recording += 1;
        let result = f(self);
        self.recording -= 1;
        result
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::MouseAction;
    use crate::render::strip::CellStyle;

    fn text(s: &str) -> Strip {
        let mut strip = Strip::new(0, 0);
        strip.push_str(s, CellStyle::default());
        strip
    }

    #[test]
    fn push_translates_and_clips() {
        let mut frame = Frame::new(Size::new(10, 3), Theme::plain());
        frame.layout_in(Region::new(2, 1, 4, 1), |f| {
            assert_eq!(f.max(), Size::new(4, 1));
            f.push(text("abcdefgh"));
            let mut below = text("zz");
            below.y = 1;
            f.push(below);
        });
        let strips = frame.into_strips();
        assert_eq!(strips.len(), 1);
        assert_eq!((strips[0].x_offset, strips[0].y), (2, 1));
        assert_eq!(strips[0].text(), "abcd");
    }

    #[test]
    fn nested_layout_restores_state() {
        let mut frame = Frame::new(Size::new(20, 5), Theme::plain());
        frame.layout_in(Region::new(5, 0, 10, 5), |f| {
            f.layout_in(Region::new(1, 1, 3, 1), |f| {
                assert_eq!(f.origin(), Offset::new(6, 1));
            });
            assert_eq!(f.origin(), Offset::new(5, 0));
            assert_eq!(f.max(), Size::new(10, 5));
        });
        assert_eq!(frame.origin(), Offset::default());
        assert_eq!(frame.max(), Size::new(20, 5));
    }

    #[test]
    fn record_hides_output_and_events() {
        let event = InputEvent::mouse(MouseAction::Moved, 1, 1);
        let mut frame = Frame::new(Size::new(5, 5), Theme::plain()).with_events([event]);
        let seen = frame.record(|f| {
            assert!(f.is_recording());
            f.push(text("probe"));
            f.events().len()
        });
        assert_eq!(seen, 0);
        assert!(!frame.is_recording());
        assert!(frame.strips().is_empty());
        assert_eq!(frame.events().len(), 1);
    }

    #[test]
    fn to_local_subtracts_origin() {
        let mut frame = Frame::new(Size::new(20, 20), Theme::plain());
        let me = MouseEvent::new(MouseAction::Moved, 7, 9);
        let local = frame.layout_in(Region::new(5, 5, 5, 5), |f| f.to_local(&me));
        assert_eq!(local, Offset::new(2, 4));
    }

    #[test]
    fn with_constraints_is_scoped() {
        let mut frame = Frame::new(Size::new(8, 8), Theme::plain());
        let loose = Constraints::loose(Size::new(8, 8));
        frame.with_constraints(loose, |f| assert_eq!(f.constraints().min, Size::ZERO));
        assert_eq!(frame.constraints().min, Size::new(8, 8));
        frame.invalidate();
        assert!(frame.is_invalidated());
    }
}
