//! Pointer gestures: drag handles and clickable areas.
//!
//! Gestures are plain state machines fed one mouse event at a time with the
//! pointer already converted to frame-local coordinates. They remember nothing
//! about geometry between frames except what a press started.

use crate::geometry::{Axis, Offset, Region};
use crate::render::Frame;

use super::input::{InputEvent, MouseAction, MouseBtn};

// ---------------------------------------------------------------------------
// Drag
// ---------------------------------------------------------------------------

/// State of one drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer held down; `grab` is its distance from the handle's leading
    /// edge at press time, measured along the drag axis.
    Dragging { grab: i32 },
}

/// Turns press/drag/release events over a handle into deltas along an axis.
///
/// Each delta is measured against the handle's *current* position rather
/// than the previous pointer position, so a handle that was clamped follows
/// the pointer again only once the pointer comes back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drag {
    state: DragState,
}

impl Drag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one mouse event.
    ///
    /// `hit` is the handle rectangle and `anchor` the handle's leading edge
    /// along `axis`, both in the same coordinates as `pointer`. Returns the
    /// distance the handle should move, if any.
    pub fn update(
        &mut self,
        kind: MouseAction,
        pointer: Offset,
        hit: Region,
        axis: Axis,
        anchor: i32,
    ) -> Option<i32> {
        match (kind, self.state) {
            (MouseAction::Down(MouseBtn::Left), _) => {
                self.state = if hit.contains_offset(pointer) {
                    DragState::Dragging { grab: axis.main_coord(pointer) - anchor }
                } else {
                    DragState::Idle
                };
                None
            }
            (MouseAction::Drag(MouseBtn::Left), DragState::Dragging { grab }) => {
                let delta = axis.main_coord(pointer) - (anchor + grab);
                (delta != 0).then_some(delta)
            }
            (MouseAction::Up(MouseBtn::Left), _) => {
                self.state = DragState::Idle;
                None
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Clickable
// ---------------------------------------------------------------------------

/// Press-and-release detection plus hover tracking for one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clickable {
    pressed: bool,
    hovered: bool,
}

impl Clickable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed one mouse event; returns true when it completes a click.
    pub fn update(&mut self, kind: MouseAction, pointer: Offset, hit: Region) -> bool {
        let inside = hit.contains_offset(pointer);
        match kind {
            MouseAction::Down(MouseBtn::Left) => {
                self.pressed = inside;
                false
            }
            MouseAction::Up(MouseBtn::Left) => {
                let clicked = self.pressed && inside;
                self.pressed = false;
                clicked
            }
            MouseAction::Moved | MouseAction::Drag(_) => {
                self.hovered = inside;
                false
            }
            _ => false,
        }
    }

    /// Feed every mouse event of `frame`; returns whether any completed a click.
    ///
    /// `hit` is in the frame's local coordinates.
    pub fn clicked(&mut self, frame: &Frame, hit: Region) -> bool {
        let mut clicked = false;
        for event in frame.events() {
            if let InputEvent::Mouse(me) = event {
                clicked |= self.update(me.kind, frame.to_local(me), hit);
            }
        }
        clicked
    }
}

// ===========================================================================
// Tests
// ===========================================================================
