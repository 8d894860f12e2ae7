//! Pilot: programmatic interaction with a headless widget.
//!
//! The `Pilot` owns a widget and a virtual terminal size. Input methods queue
//! events; [`Pilot::tick`] lays the widget out for one frame with the queued
//! events and keeps the frame's output for inspection.

use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
use crate::geometry::Size;
use crate::render::strip::Strip;
use crate::render::{Frame, Theme};
use crate::widget::Widget;

use super::snapshot::strips_to_string;

/// Upper bound on frames run by [`Pilot::settle`].
const MAX_SETTLE_FRAMES: usize = 8;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless frame driver for testing.
///
/// # Examples
///
/// ```ignore
/// use gilt_tui_widgets::testing::Pilot;
/// use gilt_tui_widgets::widgets::Calendar;
///
/// let mut pilot = Pilot::new(Calendar::new(), 28, 10);
/// pilot.click(1, 0);
/// pilot.tick();
/// assert!(pilot.widget().is_month_dropdown_open());
/// ```
pub struct Pilot<W> {
    widget: W,
    size: Size,
    theme: Theme,
    pending: Vec<InputEvent>,
    strips: Vec<Strip>,
    invalidated: bool,
    frames: usize,
}

impl<W: Widget> Pilot<W> {
    /// Drive `widget` in a virtual terminal of the given size.
    pub fn new(widget: W, width: u16, height: u16) -> Self {
        Self {
            widget,
            size: Size::new(i32::from(width), i32::from(height)),
            theme: Theme::plain(),
            pending: Vec::new(),
            strips: Vec::new(),
            invalidated: false,
            frames: 0,
        }
    }

    /// Use `theme` instead of the plain theme (builder pattern).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Queue a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.press_key_with(key, Modifiers::NONE);
    }

    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.pending.push(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Queue a left-button press at (x, y).
    pub fn press(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Down(MouseBtn::Left), x, y);
    }

    /// Queue a pointer move with the left button held.
    pub fn drag_to(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Drag(MouseBtn::Left), x, y);
    }

    pub fn release(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Up(MouseBtn::Left), x, y);
    }

    /// Queue a press and release at (x, y).
    pub fn click(&mut self, x: u16, y: u16) {
        self.press(x, y);
        self.release(x, y);
    }

    /// Queue a pointer move with no button held.
    pub fn hover(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::Moved, x, y);
    }

    pub fn scroll_down(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::ScrollDown, x, y);
    }

    pub fn scroll_up(&mut self, x: u16, y: u16) {
        self.mouse(MouseAction::ScrollUp, x, y);
    }

    /// Resize the virtual terminal; the next frame uses the new size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = Size::new(i32::from(width), i32::from(height));
        self.pending.push(InputEvent::Resize { width, height });
    }

    fn mouse(&mut self, kind: MouseAction, x: u16, y: u16) {
        self.pending.push(InputEvent::Mouse(MouseEvent::new(kind, x, y)));
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Lay out one frame with every queued event.
    ///
    /// Returns whether the widget asked for another frame.
    pub fn tick(&mut self) -> bool {
        let events = std::mem::take(&mut self.pending);
        let mut frame = Frame::new(self.size, self.theme.clone()).with_events(events);
        self.widget.layout(&mut frame);
        self.invalidated = frame.is_invalidated();
        self.strips = frame.into_strips();
        self.frames += 1;
        self.invalidated
    }

    /// Tick until the widget stops invalidating, up to a fixed bound.
    ///
    /// Returns the number of frames run.
    pub fn settle(&mut self) -> usize {
        let mut count = 1;
        while self.tick() && count < MAX_SETTLE_FRAMES {
            count += 1;
        }
        count
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Strips produced by the last frame.
    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    /// Whether the last frame asked for another one.
    pub fn was_invalidated(&self) -> bool {
        self.invalidated
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Text of the last frame, one trimmed line per row.
    pub fn text(&self) -> String {
        strips_to_string(&self.strips, self.size.width, self.size.height)
    }

    /// Line `row` of the last frame, or an empty string past the bottom.
    pub fn line(&self, row: usize) -> String {
        self.text().split('\n').nth(row).unwrap_or_default().to_owned()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;
    use crate::widget::traits::from_fn;
    use crate::widgets::{Label, Pane, Resizer};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_panes() -> Resizer {
        let panes = vec![Pane::new(Label::new("a")), Pane::new(Label::new("b"))];
        Resizer::new(Axis::Horizontal, panes).unwrap()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_runs_no_frames() {
        let pilot = Pilot::new(Label::new("x"), 80, 24);
        assert_eq!(pilot.size(), Size::new(80, 24));
        assert_eq!(pilot.frame_count(), 0);
        assert_eq!(pilot.text(), "\n".repeat(23));
    }

    #[test]
    fn tick_renders_widget() {
        let mut pilot = Pilot::new(Label::new("Hello"), 10, 2);
        assert!(!pilot.tick());
        assert_eq!(pilot.line(0), "Hello");
        assert_eq!(pilot.line(1), "");
        assert_eq!(pilot.line(7), "");
        assert_eq!(pilot.frame_count(), 1);
    }

    // ── Input ────────────────────────────────────────────────────────

    #[test]
    fn queued_events_reach_one_frame() {
        let counts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&counts);
        let probe = from_fn("probe", move |f: &mut Frame| {
            sink.borrow_mut().push(f.events().len());
            f.max()
        });
        let mut pilot = Pilot::new(probe, 5, 5);
        pilot.click(1, 1);
        pilot.press_key(Key::Escape);
        pilot.hover(2, 2);
        pilot.tick();
        pilot.tick();
        assert_eq!(*counts.borrow(), vec![4, 0]);
        assert_eq!(pilot.frame_count(), 2);
    }

    #[test]
    fn drag_sequence_moves_handle() {
        let mut pilot = Pilot::new(two_panes(), 20, 3);
        pilot.tick();
        pilot.press(9, 1);
        pilot.drag_to(4, 1);
        assert!(pilot.tick());
        assert!(pilot.was_invalidated());
        pilot.release(4, 1);
        pilot.tick();
        assert!(!pilot.was_invalidated());
        assert_eq!(pilot.widget().chain().boundaries(), &[5, 20]);
        assert_eq!(pilot.line(0), "a   │b");
    }

    #[test]
    fn resize_changes_frame_size() {
        let mut pilot = Pilot::new(two_panes(), 20, 3);
        pilot.tick();
        pilot.resize(40, 3);
        pilot.tick();
        assert_eq!(pilot.widget().chain().total_length(), 40);
        assert_eq!(pilot.widget().chain().boundaries(), &[20, 40]);
    }

    #[test]
    fn settle_stops_when_quiet() {
        let mut pilot = Pilot::new(two_panes(), 20, 3);
        assert_eq!(pilot.settle(), 1);

        let mut always = Pilot::new(
            from_fn("busy", |f: &mut Frame| {
                f.invalidate();
                f.max()
            }),
            4,
            4,
        );
        assert_eq!(always.settle(), MAX_SETTLE_FRAMES);
    }

    #[test]
    fn widget_mut_allows_mutation() {
        let mut pilot = Pilot::new(Label::new("x"), 4, 1).with_theme(Theme::default());
        pilot.tick();
        assert_eq!(pilot.strips()[0].cells[0].style, Theme::default().text());
        *pilot.widget_mut() = Label::new("y");
        pilot.tick();
        assert_eq!(pilot.line(0), "y");
    }
}
