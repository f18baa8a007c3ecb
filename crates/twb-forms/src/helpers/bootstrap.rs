//! Bootstrap 3 collaborators.

use std::collections::HashMap;

use ironhtml::typed::Element;
use ironhtml_elements::{Li, Ul};
use tracing::trace;

use super::{html_escape, ElementView, ErrorsRenderer, InputRenderer, LabelRenderer, Translator};
use crate::attributes::Attributes;
use crate::element::ElementKind;
use crate::error::{FormError, Result};

/// Default control renderer.
///
/// Checkboxes, radios and multi-checkboxes draw their own `<label>` tags
/// using the view's label attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormInput;

impl FormInput {
    /// Creates a new input renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn checkable(view: &ElementView<'_>, input_type: &str, name: &str) -> String {
        let label_open = label_open_tag(&view.label_attributes);
        let current = view.element.value.as_deref();

        view.element
            .value_options
            .iter()
            .map(|(value, label)| {
                let mut attrs = view.attributes.as_ref().clone();
                attrs.set("type", input_type);
                attrs.set("name", name);
                attrs.set("value", value.as_str());
                let checked = if current == Some(value.as_str()) {
                    " checked"
                } else {
                    ""
                };
                format!(
                    "{label_open}<input {}{checked}> {}</label>",
                    attrs.to_html(),
                    html_escape(label)
                )
            })
            .collect()
    }
}

impl InputRenderer for FormInput {
    fn render(&self, view: &ElementView<'_>) -> String {
        let element = view.element;
        let mut attrs = view.attributes.as_ref().clone();

        match element.kind() {
            ElementKind::Button => {
                let content = element.label.as_deref().map(html_escape).unwrap_or_default();
                format!("<button {}>{content}</button>", attrs.to_html())
            }
            ElementKind::Checkbox => {
                let checked = element
                    .value
                    .as_deref()
                    .is_some_and(|v| v == "1" || v == "true" || v == "on");
                let checked_attr = if checked { " checked" } else { "" };
                attrs.set("value", "1");
                let input = format!("<input {}{checked_attr}>", attrs.to_html());

                match element.label.as_deref().filter(|l| !l.is_empty()) {
                    Some(label) => format!(
                        "{}{input} {}</label>",
                        label_open_tag(&view.label_attributes),
                        html_escape(label)
                    ),
                    None => input,
                }
            }
            ElementKind::Radio => Self::checkable(view, "radio", view.name()),
            ElementKind::MultiCheckbox => {
                Self::checkable(view, "checkbox", &format!("{}[]", view.name()))
            }
            _ => {
                if let Some(value) = &element.value {
                    attrs.set("value", value.as_str());
                }
                format!("<input {}>", attrs.to_html())
            }
        }
    }
}

/// Default label tag renderer.
///
/// Points the label at the control's `id` unless `for` is already set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormLabel;

impl FormLabel {
    /// Creates a new label renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LabelRenderer for FormLabel {
    fn open_tag(&self, view: &ElementView<'_>) -> String {
        let mut attrs = view.label_attributes.as_ref().clone();
        if attrs.get("for").is_none() {
            if let Some(id) = view.attributes.get("id") {
                attrs.set("for", id);
            }
        }
        label_open_tag(&attrs)
    }

    fn close_tag(&self) -> String {
        "</label>".to_string()
    }
}

fn label_open_tag(attrs: &Attributes) -> String {
    if attrs.is_empty() {
        "<label>".to_string()
    } else {
        format!("<label {}>", attrs.to_html())
    }
}

/// Default validation message renderer: an unordered list of messages.
#[derive(Debug, Clone)]
pub struct FormElementErrors {
    /// Class of the `<ul>` wrapper.
    pub class: String,
}

impl Default for FormElementErrors {
    fn default() -> Self {
        Self {
            class: "help-block".to_string(),
        }
    }
}

impl FormElementErrors {
    /// Creates a new errors renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the class of the list wrapper.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl ErrorsRenderer for FormElementErrors {
    fn render(&self, view: &ElementView<'_>) -> String {
        let messages = &view.element.messages;
        if messages.is_empty() {
            return String::new();
        }

        Element::<Ul>::new()
            .class(&self.class)
            .children(messages.iter(), |message, li: Element<Li>| li.text(message))
            .render()
    }
}

/// Translator backed by in-memory message catalogs, one per text domain.
///
/// Messages missing from the catalog are returned untranslated.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    /// Creates an empty translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads catalogs from JSON shaped as `{"domain": {"message": "translation"}}`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidCatalog`] if the document does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalogs = serde_json::from_str(json).map_err(FormError::InvalidCatalog)?;
        Ok(Self { catalogs })
    }

    /// Adds a translation.
    #[must_use]
    pub fn with(
        mut self,
        text_domain: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.catalogs
            .entry(text_domain.into())
            .or_default()
            .insert(message.into(), translation.into());
        self
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, message: &str, text_domain: &str) -> String {
        match self.catalogs.get(text_domain).and_then(|c| c.get(message)) {
            Some(translation) => translation.clone(),
            None => {
                trace!(message, text_domain, "no translation found");
                message.to_string()
            }
        }
    }
}
