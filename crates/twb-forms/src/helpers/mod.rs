//! Collaborators the row renderer delegates to.
//!
//! The row renderer only decides structure and classes. Drawing the control,
//! the label tag, the error list and translating text is done by the traits
//! in this module. Bootstrap 3 defaults live in [`bootstrap`].

pub mod bootstrap;

use std::borrow::Cow;

use crate::attributes::Attributes;
use crate::config::LabelPosition;
use crate::element::{ElementKind, FormElement};

/// An element together with the attributes derived for one render call.
///
/// The row renderer never mutates the caller's element. Classes it merges
/// (label classes, the input error class) are carried here instead.
#[derive(Debug, Clone)]
pub struct ElementView<'a> {
    /// The element being rendered.
    pub element: &'a FormElement,
    /// Control attributes to render.
    pub attributes: Cow<'a, Attributes>,
    /// Label attributes to render.
    pub label_attributes: Cow<'a, Attributes>,
}

impl<'a> ElementView<'a> {
    /// Creates a view using the element's own attributes.
    #[must_use]
    pub fn new(element: &'a FormElement) -> Self {
        Self {
            element,
            attributes: Cow::Borrowed(&element.attributes),
            label_attributes: Cow::Borrowed(&element.label_attributes),
        }
    }

    /// Replaces the label attributes.
    #[must_use]
    pub fn with_label_attributes(mut self, label_attributes: Attributes) -> Self {
        self.label_attributes = Cow::Owned(label_attributes);
        self
    }

    /// Returns the element kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.element.name
    }
}

/// Everything a partial template receives when it takes over a row.
#[derive(Debug, Clone)]
pub struct PartialContext<'a> {
    /// The element being rendered.
    pub element: &'a FormElement,
    /// Label text, translated.
    pub label: String,
    /// Label attributes configured on the renderer.
    pub label_attributes: &'a Attributes,
    /// Configured label position.
    pub label_position: LabelPosition,
    /// Whether errors should be rendered.
    pub render_errors: bool,
}

/// Renders the control itself.
pub trait InputRenderer: Send + Sync {
    /// Renders the control markup.
    fn render(&self, view: &ElementView<'_>) -> String;
}

/// Renders the label tag around the label text.
pub trait LabelRenderer: Send + Sync {
    /// Renders the opening `<label>` tag.
    fn open_tag(&self, view: &ElementView<'_>) -> String;

    /// Renders the closing tag.
    fn close_tag(&self) -> String;
}

/// Renders the validation messages of an element.
pub trait ErrorsRenderer: Send + Sync {
    /// Renders the messages, or an empty string when there are none.
    fn render(&self, view: &ElementView<'_>) -> String;
}

/// External template engine used for partial row templates.
pub trait PartialRenderer: Send + Sync {
    /// Renders the named partial.
    fn render(&self, partial: &str, context: &PartialContext<'_>) -> String;
}

/// Translates user-facing text.
pub trait Translator: Send + Sync {
    /// Translates `message` within `text_domain`.
    fn translate(&self, message: &str, text_domain: &str) -> String;
}

/// Escapes HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
