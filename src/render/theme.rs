//! Theme: the host-supplied color source.
//!
//! Widgets never pick colors themselves; they ask the theme for a
//! [`CellStyle`] by role.

use serde::{Deserialize, Serialize};

use super::strip::CellStyle;

/// Color roles used by the built-in widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub contrast_fg: Option<String>,
    pub contrast_bg: Option<String>,
    pub muted_bg: Option<String>,
    pub handle: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Some("white".into()),
            bg: Some("black".into()),
            contrast_fg: Some("white".into()),
            contrast_bg: Some("#3f51b5".into()),
            muted_bg: Some("#eceff1".into()),
            handle: Some("grey".into()),
        }
    }
}

impl Theme {
    /// A theme with every color unset; styles carry only attributes.
    pub fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            contrast_fg: None,
            contrast_bg: None,
            muted_bg: None,
            handle: None,
        }
    }

    /// Regular text on the regular background.
    pub fn text(&self) -> CellStyle {
        CellStyle::new().fg(self.fg.as_deref()).bg(self.bg.as_deref())
    }

    /// Header bars and other accent surfaces.
    pub fn contrast(&self) -> CellStyle {
        CellStyle::new()
            .fg(self.contrast_fg.as_deref())
            .bg(self.contrast_bg.as_deref())
    }

    /// Inactive content such as days outside the displayed month.
    pub fn muted(&self) -> CellStyle {
        CellStyle::new()
            .fg(self.fg.as_deref())
            .bg(self.muted_bg.as_deref())
            .dim()
    }

    /// Hovered, current or selected items.
    pub fn highlight(&self) -> CellStyle {
        self.contrast().reverse()
    }

    /// Resize handle bars.
    pub fn handle(&self) -> CellStyle {
        CellStyle::new().fg(self.handle.as_deref()).bg(self.bg.as_deref())
    }
}
