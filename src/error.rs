//! Error type shared by widget constructors and the resize chain.
//!
//! Only wiring mistakes surface as errors. Anything driven by live input
//! (pointer drags, container resizes, date arithmetic) is clamped instead.

/// Errors produced by misconfigured widgets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("index {index} out of range for {len} regions")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = WidgetError::InvalidConfiguration("no regions".into());
        assert_eq!(e.to_string(), "invalid configuration: no regions");

        let e = WidgetError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(e.to_string(), "index 4 out of range for 3 regions");
    }
}
