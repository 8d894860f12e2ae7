//! Widget configuration.
//!
//! Both structs deserialize from partial documents; missing fields take the
//! defaults below, so a host can keep only the overrides in its settings file.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Spacing};

// ---------------------------------------------------------------------------
// ResizerConfig
// ---------------------------------------------------------------------------

/// Settings for [`Resizer`](crate::widgets::Resizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizerConfig {
    /// Direction along which panes are laid out and resized.
    pub axis: Axis,
    /// Minimum pane length in cells. Unset means 10% of the container,
    /// and any value is capped at an even share of the container.
    pub min_region_length: Option<i32>,
    /// Thickness of the default handle bar in cells.
    pub handle_thickness: i32,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            min_region_length: None,
            handle_thickness: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// CalendarConfig
// ---------------------------------------------------------------------------

/// Settings for [`Calendar`](crate::widgets::Calendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Weekday shown in the first column.
    pub first_weekday: Weekday,
    /// Years listed in the year dropdown before the initial year.
    pub years_before: i32,
    /// Years listed in the year dropdown after the initial year.
    pub years_after: i32,
    /// Lower bound for the height of one week row.
    pub min_cell_height: i32,
    pub inset: Spacing,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Mon,
            years_before: 100,
            years_after: 100,
            min_cell_height: 1,
            inset: Spacing::ZERO,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resizer_config_from_partial_json() {
        let config: ResizerConfig =
            serde_json::from_str(r#"{ "axis": "vertical", "min_region_length": 4 }"#).unwrap();
        assert_eq!(
            config,
            ResizerConfig {
                axis: Axis::Vertical,
                min_region_length: Some(4),
                handle_thickness: 1,
            }
        );
    }

    #[test]
    fn calendar_config_from_partial_json() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{ "first_weekday": "Sun", "inset": { "left": 2 } }"#).unwrap();
        assert_eq!(config.first_weekday, Weekday::Sun);
        assert_eq!(config.inset, Spacing::new(0, 0, 0, 2));
        assert_eq!(config.years_before, 100);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
    }
}
