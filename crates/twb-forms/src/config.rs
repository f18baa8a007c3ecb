//! Row renderer configuration.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::error::{FormError, Result};

/// Where a label sits relative to its control in partial templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Label before the control.
    #[default]
    Prepend,
    /// Label after the control.
    Append,
}

/// Settings shared by every row a renderer draws.
///
/// ```rust
/// use twb_forms::RenderConfig;
///
/// let config = RenderConfig::from_json(r#"{"render-errors": false}"#).unwrap();
/// assert!(!config.render_errors);
/// assert_eq!(config.input_error_class.as_deref(), Some("input-error"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Label attributes used when an element carries none of its own.
    pub label_attributes: Attributes,
    /// Whether validation messages are rendered below the control.
    pub render_errors: bool,
    /// Partial template that takes over the whole row when set.
    pub partial: Option<String>,
    /// Class added to controls that have validation messages.
    pub input_error_class: Option<String>,
    /// Text domain passed to the translator.
    pub translator_text_domain: String,
    /// Label position forwarded to partial templates.
    pub label_position: LabelPosition,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            label_attributes: Attributes::new(),
            render_errors: true,
            partial: None,
            input_error_class: Some("input-error".to_string()),
            translator_text_domain: "default".to_string(),
            label_position: LabelPosition::Prepend,
        }
    }
}

impl RenderConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidConfig`] if the document does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new();
        assert!(config.render_errors);
        assert!(config.partial.is_none());
        assert!(config.label_attributes.is_empty());
        assert_eq!(config.translator_text_domain, "default");
        assert_eq!(config.label_position, LabelPosition::Prepend);
    }

    #[test]
    fn test_from_json() {
        let config = RenderConfig::from_json(
            r#"{
                "label-attributes": {"class": "lbl"},
                "partial": "form/row",
                "input-error-class": "is-invalid",
                "translator-text-domain": "forms",
                "label-position": "append"
            }"#,
        )
        .unwrap();

        assert_eq!(config.label_attributes.class(), "lbl");
        assert_eq!(config.partial.as_deref(), Some("form/row"));
        assert_eq!(config.input_error_class.as_deref(), Some("is-invalid"));
        assert_eq!(config.translator_text_domain, "forms");
        assert_eq!(config.label_position, LabelPosition::Append);
        assert!(config.render_errors);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RenderConfig::from_json(r#"{"render-errors": "yes"}"#).unwrap_err();
        assert!(matches!(err, FormError::InvalidConfig(_)));
    }
}
