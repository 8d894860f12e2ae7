//! Widget system: trait, closure widgets, scrolling.

pub mod scroll;
pub mod traits;

pub use scroll::ScrollState;
pub use traits::{from_fn, FnWidget, Widget};
