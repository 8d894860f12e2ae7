//! Layout arithmetic: the resize chain behind the Resizer widget.

pub mod chain;

pub use chain::{ResizeChain, DEFAULT_MIN_FRACTION};
