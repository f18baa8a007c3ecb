//! Bootstrap 3 form layouts.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How a form row arranges its label and control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    /// Label and control side by side on the grid (`col-lg-2` / `col-lg-10`).
    #[default]
    Horizontal,
    /// Compact layout, labels only visible to screen readers.
    Inline,
    /// Label stacked above the control, no grid columns.
    Vertical,
}

impl Layout {
    /// Returns the option value naming this layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
            Self::Vertical => "vertical",
        }
    }

    /// Resolves a layout option value.
    ///
    /// Unknown values and a missing option both resolve to `Horizontal`.
    #[must_use]
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("vertical") => Self::Vertical,
            Some("inline") => Self::Inline,
            None | Some("horizontal") => Self::Horizontal,
            Some(other) => {
                warn!(layout = other, "unknown layout, using horizontal");
                Self::Horizontal
            }
        }
    }
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        Self::resolve(Some(&value))
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.as_str().to_string()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Layout::resolve(None), Layout::Horizontal);
        assert_eq!(Layout::resolve(Some("vertical")), Layout::Vertical);
        assert_eq!(Layout::resolve(Some("inline")), Layout::Inline);
        assert_eq!(Layout::resolve(Some("horizontal")), Layout::Horizontal);
        assert_eq!(Layout::resolve(Some("sideways")), Layout::Horizontal);
    }

    #[test]
    fn test_serde_round_trip_uses_option_names() {
        let layout: Layout = serde_json::from_str(r#""inline""#).unwrap();
        assert_eq!(layout, Layout::Inline);
        assert_eq!(serde_json::to_string(&Layout::Vertical).unwrap(), r#""vertical""#);
    }

    #[test]
    fn test_unknown_layout_option_is_horizontal() {
        let layout: Layout = serde_json::from_str(r#""sideways""#).unwrap();
        assert_eq!(layout, Layout::Horizontal);
    }
}
