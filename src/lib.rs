//! # gilt-tui-widgets
//!
//! Two reusable widgets for gilt-tui style immediate-mode terminal UIs: a
//! month-view date picker ([`widgets::Calendar`]) and a drag-resizable
//! multi-pane container ([`widgets::Resizer`]).
//!
//! Widgets are laid out once per frame into a [`render::Frame`], which carries
//! the size constraints, the pointer/keyboard events for that frame and the
//! strips the widgets emit. No widget keeps references into the host.
//!
//! ## Core Systems
//!
//! - **[`layout`]** — `ResizeChain`: 1-D chained pane boundaries with minimum-size
//!   clamping, push propagation and proportional rescaling
//! - **[`date`]** — Month grid arithmetic and the `DatePicker` selection state
//! - **[`widget`]** — Widget trait, closure widgets, scroll state
//! - **[`widgets`]** — Built-in widgets: Label, Resizer, Calendar
//! - **[`event`]** — Input events, drag and click gestures
//! - **[`render`]** — Frame, strips, theme
//! - **[`config`]** — Serde-loadable widget configuration
//! - **[`geometry`]** — Offset, Size, Region, Spacing, Axis, Constraints primitives

// Foundation
pub mod error;
pub mod geometry;

// Core systems
pub mod date;
pub mod layout;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Configuration
pub mod config;

// Headless test helpers
pub mod testing;

pub use error::{Result, WidgetError};
