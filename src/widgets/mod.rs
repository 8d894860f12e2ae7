//! Built-in widgets: Label, Resizer, Calendar.

pub mod calendar;
pub mod label;
pub mod resizer;

pub use calendar::{Calendar, DROPDOWN_GAP, DROPDOWN_WIDTH};
pub use label::Label;
pub use resizer::{HandleBar, Pane, Resizer};
