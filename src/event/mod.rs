//! Event system: input events and pointer gestures.

pub mod gesture;
pub mod input;

pub use gesture::{Clickable, Drag, DragState};
pub use input::{from_crossterm, InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
