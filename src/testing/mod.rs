//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a widget frame by frame without a real
//! terminal. Use [`render_to_string`] and [`strips_to_string`] to capture
//! widget output as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{render_to_string, strips_to_string};
