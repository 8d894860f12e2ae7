//! Input event types wrapping crossterm for decoupling.
//!
//! Widgets only ever see [`InputEvent`]s delivered through their frame.
//! Crossterm events are converted with [`from_crossterm`], which drops the
//! variants no widget here reacts to (focus changes, paste).

use std::ops::BitOr;

use crossterm::event as ct;

use crate::geometry::Offset;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Other,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }
}

// ---------------------------------------------------------------------------
// MouseBtn / MouseAction / MouseEvent
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Drag(MouseBtn),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A mouse event at an absolute terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseAction, x: u16, y: u16) -> Self {
        Self { kind, x, y, modifiers: Modifiers::NONE }
    }

    /// Absolute position as an [`Offset`].
    pub fn position(&self) -> Offset {
        Offset::new(i32::from(self.x), i32::from(self.y))
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event delivered to widgets for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Shorthand for an unmodified mouse event.
    pub fn mouse(kind: MouseAction, x: u16, y: u16) -> Self {
        InputEvent::Mouse(MouseEvent::new(kind, x, y))
    }

    /// Shorthand for an unmodified key press.
    pub fn key(code: Key) -> Self {
        InputEvent::Key(KeyEvent::new(code, Modifiers::NONE))
    }
}

// ---------------------------------------------------------------------------
// crossterm conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: ct::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(ct::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(ct::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(ct::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(event: ct::KeyEvent) -> Self {
        let code = match event.code {
            ct::KeyCode::Char(c) => Key::Char(c),
            ct::KeyCode::Enter => Key::Enter,
            ct::KeyCode::Esc => Key::Escape,
            ct::KeyCode::Tab => Key::Tab,
            ct::KeyCode::Backspace => Key::Backspace,
            ct::KeyCode::Left => Key::Left,
            ct::KeyCode::Right => Key::Right,
            ct::KeyCode::Up => Key::Up,
            ct::KeyCode::Down => Key::Down,
            ct::KeyCode::PageUp => Key::PageUp,
            ct::KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        };
        KeyEvent::new(code, convert_modifiers(event.modifiers))
    }
}

fn convert_mouse_button(b: ct::MouseButton) -> MouseBtn {
    match b {
        ct::MouseButton::Left => MouseBtn::Left,
        ct::MouseButton::Right => MouseBtn::Right,
        ct::MouseButton::Middle => MouseBtn::Middle,
    }
}

impl From<ct::MouseEvent> for MouseEvent {
    fn from(event: ct::MouseEvent) -> Self {
        let kind = match event.kind {
            ct::MouseEventKind::Down(b) => MouseAction::Down(convert_mouse_button(b)),
            ct::MouseEventKind::Up(b) => MouseAction::Up(convert_mouse_button(b)),
            ct::MouseEventKind::Drag(b) => MouseAction::Drag(convert_mouse_button(b)),
            ct::MouseEventKind::Moved => MouseAction::Moved,
            ct::MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            // Horizontal wheels count as scrolling down.
            _ => MouseAction::ScrollDown,
        };
        MouseEvent {
            kind,
            x: event.column,
            y: event.row,
            modifiers: convert_modifiers(event.modifiers),
        }
    }
}

/// Convert a crossterm event, dropping the kinds widgets do not consume.
pub fn from_crossterm(event: ct::Event) -> Option<InputEvent> {
    match event {
        ct::Event::Key(ke) => Some(InputEvent::Key(ke.into())),
        ct::Event::Mouse(me) => Some(InputEvent::Mouse(me.into())),
        ct::Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(Modifiers::NONE.is_empty());
    }

    // ── crossterm ────────────────────────────────────────────────────

    #[test]
    fn key_from_crossterm() {
        let event = ct::Event::Key(ct::KeyEvent::new(ct::KeyCode::Esc, ct::KeyModifiers::SHIFT));
        let Some(InputEvent::Key(ke)) = from_crossterm(event) else {
            panic!("expected key event");
        };
        assert_eq!(ke.code, Key::Escape);
        assert!(ke.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn unsupported_key_maps_to_other() {
        let ke = KeyEvent::from(ct::KeyEvent::new(ct::KeyCode::F(5), ct::KeyModifiers::NONE));
        assert_eq!(ke.code, Key::Other);
    }

    #[test]
    fn mouse_drag_from_crossterm() {
        let event = ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Drag(ct::MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: ct::KeyModifiers::CONTROL,
        });
        let Some(InputEvent::Mouse(me)) = from_crossterm(event) else {
            panic!("expected mouse event");
        };
        assert_eq!(me.kind, MouseAction::Drag(MouseBtn::Left));
        assert_eq!(me.position(), Offset::new(12, 3));
        assert!(me.modifiers.contains(Modifiers::CTRL));
    }

    #[test]
    fn resize_from_crossterm() {
        assert_eq!(
            from_crossterm(ct::Event::Resize(120, 40)),
            Some(InputEvent::Resize { width: 120, height: 40 })
        );
    }

    #[test]
    fn focus_and_paste_are_dropped() {
        assert_eq!(from_crossterm(ct::Event::FocusGained), None);
        assert_eq!(from_crossterm(ct::Event::Paste("x".into())), None);
    }
}
