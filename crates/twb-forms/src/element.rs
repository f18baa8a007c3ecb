//! Form elements as seen by the row renderer.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::error::{FormError, Result};
use crate::layout::Layout;

/// Kind of control, derived from the element's `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Plain text input (also used when no type is set).
    Text,
    /// Single checkbox.
    Checkbox,
    /// Radio group.
    Radio,
    /// Group of checkboxes.
    MultiCheckbox,
    /// Submit input.
    Submit,
    /// Button, which always carries its label inside itself.
    Button,
    /// Any other input type (`email`, `password`, `select`, ...).
    Other(String),
}

impl ElementKind {
    /// Maps a `type` attribute value to a kind.
    #[must_use]
    pub fn from_type(value: &str) -> Self {
        match value {
            "" | "text" => Self::Text,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "multi_checkbox" => Self::MultiCheckbox,
            "submit" => Self::Submit,
            "button" => Self::Button,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the `type` attribute value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::MultiCheckbox => "multi_checkbox",
            Self::Submit => "submit",
            Self::Button => "button",
            Self::Other(other) => other,
        }
    }

    /// Returns whether the control draws its own labels.
    #[must_use]
    pub const fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio | Self::MultiCheckbox)
    }
}

/// Rendering options attached to an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ElementOptions {
    /// Layout of the row. Defaults to horizontal.
    pub layout: Option<Layout>,
    /// Bootstrap validation state (`error`, `success`, `warning`, ...).
    pub validation_state: Option<String>,
    /// Large-grid column count appended to the row class.
    pub column_size: Option<String>,
    /// Help text rendered below the control.
    pub help_block: Option<String>,
    /// Fallback help text used when `help-block` is empty.
    pub description: Option<String>,
}

/// A single form control with its label, options and validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormElement {
    /// Element name (the `name` attribute of the control).
    pub name: String,
    /// Label text, untranslated.
    pub label: Option<String>,
    /// Current value.
    pub value: Option<String>,
    /// Choices of radio and multi-checkbox elements (value, label).
    pub value_options: Vec<(String, String)>,
    /// Rendering options.
    pub options: ElementOptions,
    /// Control attributes, including `type` and `class`.
    pub attributes: Attributes,
    /// Attributes of the label tag.
    pub label_attributes: Attributes,
    /// Validation error messages, in display order.
    pub messages: Vec<String>,
}

impl FormElement {
    /// Creates an element of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: &ElementKind) -> Self {
        let name = name.into();
        let attributes = Attributes::new()
            .with("name", name.clone())
            .with("type", kind.as_str());
        Self {
            name,
            attributes,
            ..Self::default()
        }
    }

    /// Creates a text element.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, &ElementKind::Text)
    }

    /// Parses an element definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidElement`] if the document is not a valid
    /// element definition.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormError::InvalidElement)
    }

    /// Returns the kind derived from the `type` attribute.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        ElementKind::from_type(self.attributes.get("type").unwrap_or_default())
    }

    /// Returns whether the element has validation messages.
    #[must_use]
    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Adds a choice for radio and multi-checkbox elements.
    #[must_use]
    pub fn value_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.value_options.push((value.into(), label.into()));
        self
    }

    /// Sets the layout option.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.options.layout = Some(layout);
        self
    }

    /// Sets the validation-state option.
    #[must_use]
    pub fn validation_state(mut self, state: impl Into<String>) -> Self {
        self.options.validation_state = Some(state.into());
        self
    }

    /// Sets the column-size option.
    #[must_use]
    pub fn column_size(mut self, size: impl Into<String>) -> Self {
        self.options.column_size = Some(size.into());
        self
    }

    /// Sets the help-block option.
    #[must_use]
    pub fn help_block(mut self, text: impl Into<String>) -> Self {
        self.options.help_block = Some(text.into());
        self
    }

    /// Sets the description option.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.options.description = Some(text.into());
        self
    }

    /// Sets a control attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Sets a label attribute.
    #[must_use]
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_attributes.set(key, value);
        self
    }

    /// Adds a validation message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}
