//! Rendering primitives: frames, strips, theme.

pub mod frame;
pub mod strip;
pub mod theme;

pub use frame::Frame;
pub use strip::{CellStyle, Strip, StyledCell};
pub use theme::Theme;
