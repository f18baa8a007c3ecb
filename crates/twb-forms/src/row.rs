//! Bootstrap 3 form row rendering.

use tracing::{debug, trace, warn};

use crate::attributes::Attributes;
use crate::config::{LabelPosition, RenderConfig};
use crate::element::{ElementKind, FormElement};
use crate::helpers::bootstrap::{FormElementErrors, FormInput, FormLabel};
use crate::helpers::{
    html_escape, ElementView, ErrorsRenderer, InputRenderer, LabelRenderer, PartialContext,
    PartialRenderer, Translator,
};
use crate::layout::Layout;

/// Opening tag, escaped text and closing tag of a row label.
///
/// All three are empty when the label is suppressed.
#[derive(Debug, Default)]
struct LabelParts {
    open: String,
    content: String,
    close: String,
}

/// Renders one form row: label, control, help text and validation messages.
///
/// The renderer holds configuration and collaborators only. Everything that
/// depends on the element, including its layout, is resolved per call, so a
/// single renderer can draw any number of rows.
///
/// ```rust
/// use twb_forms::{FormElement, RowRenderer};
///
/// let renderer = RowRenderer::new();
/// let element = FormElement::text("email").label("Email").attr("id", "email");
/// let html = renderer.render(&element);
/// assert!(html.starts_with(r#"<div class="form-group ">"#));
/// assert!(html.contains(r#"<div class="col-lg-10">"#));
/// ```
pub struct RowRenderer {
    config: RenderConfig,
    input: Box<dyn InputRenderer>,
    label: Box<dyn LabelRenderer>,
    errors: Box<dyn ErrorsRenderer>,
    partial_renderer: Option<Box<dyn PartialRenderer>>,
    translator: Option<Box<dyn Translator>>,
}

impl std::fmt::Debug for RowRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowRenderer")
            .field("config", &self.config)
            .field("has_partial_renderer", &self.partial_renderer.is_some())
            .field("has_translator", &self.translator.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for RowRenderer {
    fn default() -> Self {
        Self::with_config(RenderConfig::default())
    }
}

impl RowRenderer {
    /// Creates a renderer with the default configuration and Bootstrap collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with the given configuration and Bootstrap collaborators.
    #[must_use]
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            input: Box::new(FormInput::new()),
            label: Box::new(FormLabel::new()),
            errors: Box::new(FormElementErrors::new()),
            partial_renderer: None,
            translator: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the control renderer.
    #[must_use]
    pub fn input_renderer(mut self, renderer: impl InputRenderer + 'static) -> Self {
        self.input = Box::new(renderer);
        self
    }

    /// Replaces the label tag renderer.
    #[must_use]
    pub fn label_renderer(mut self, renderer: impl LabelRenderer + 'static) -> Self {
        self.label = Box::new(renderer);
        self
    }

    /// Replaces the validation message renderer.
    #[must_use]
    pub fn errors_renderer(mut self, renderer: impl ErrorsRenderer + 'static) -> Self {
        self.errors = Box::new(renderer);
        self
    }

    /// Installs the template engine used for partial rows.
    #[must_use]
    pub fn partial_renderer(mut self, renderer: impl PartialRenderer + 'static) -> Self {
        self.partial_renderer = Some(Box::new(renderer));
        self
    }

    /// Installs a translator for labels and help text.
    #[must_use]
    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    /// Sets the partial template that takes over every row.
    #[must_use]
    pub fn partial(mut self, partial: impl Into<String>) -> Self {
        self.config.partial = Some(partial.into());
        self
    }

    /// Enables or disables validation message rendering.
    #[must_use]
    pub fn show_errors(mut self, enabled: bool) -> Self {
        self.config.render_errors = enabled;
        self
    }

    /// Sets the class added to controls with validation messages.
    #[must_use]
    pub fn input_error_class(mut self, class: impl Into<String>) -> Self {
        self.config.input_error_class = Some(class.into());
        self
    }

    /// Sets the default label attributes.
    #[must_use]
    pub fn label_attributes(mut self, attributes: Attributes) -> Self {
        self.config.label_attributes = attributes;
        self
    }

    /// Sets the translator text domain.
    #[must_use]
    pub fn translator_text_domain(mut self, text_domain: impl Into<String>) -> Self {
        self.config.translator_text_domain = text_domain.into();
        self
    }

    /// Sets the label position forwarded to partial templates.
    #[must_use]
    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.config.label_position = position;
        self
    }

    /// Renders a complete form row.
    ///
    /// Checkboxes outside the horizontal layout and submit inputs in the
    /// inline layout are returned without the `form-group` wrapper.
    #[must_use]
    pub fn render(&self, element: &FormElement) -> String {
        let layout = element.options.layout.unwrap_or_default();
        debug!(element = %element.name, %layout, "rendering form row");

        if let Some(partial) = self.config.partial.as_deref() {
            if let Some(renderer) = &self.partial_renderer {
                let context = PartialContext {
                    element,
                    label: self.render_label(element),
                    label_attributes: &self.config.label_attributes,
                    label_position: self.config.label_position,
                    render_errors: self.config.render_errors,
                };
                return renderer.render(partial, &context);
            }
            warn!(partial, "partial configured without a partial renderer");
        }

        let row_class = Self::row_class(element);
        let content = self.render_element(element, layout);

        let kind = element.kind();
        if (kind == ElementKind::Checkbox && layout != Layout::Horizontal)
            || (kind == ElementKind::Submit && layout == Layout::Inline)
        {
            trace!(element = %element.name, "rendering without form-group");
            return content;
        }

        format!(r#"<div class="form-group {row_class}">{content}</div>"#) + "\n"
    }

    /// Renders several rows one after another.
    #[must_use]
    pub fn render_rows(&self, elements: &[FormElement]) -> String {
        elements.iter().map(|element| self.render(element)).collect()
    }

    /// Computes the classes appended to `form-group`.
    ///
    /// The column size is appended without a separating space.
    #[must_use]
    pub fn row_class(element: &FormElement) -> String {
        let mut class = String::new();
        if let Some(state) = &element.options.validation_state {
            class.push_str(" has-");
            class.push_str(state);
        }
        if element.has_messages() {
            class.push_str(" has-error");
        }
        if let Some(size) = &element.options.column_size {
            class.push_str("col-lg-");
            class.push_str(size);
        }
        class
    }

    /// Renders the label and control of a row in the given layout.
    ///
    /// Without label text only the control is rendered.
    #[must_use]
    pub fn render_element(&self, element: &FormElement, layout: Layout) -> String {
        let label_text = self.render_label(element);
        let mut view = ElementView::new(element);
        if label_text.is_empty() {
            return self.input.render(&view);
        }

        let kind = element.kind();
        let label = if kind.is_checkable() {
            if element.label_attributes.is_empty() && !self.config.label_attributes.is_empty() {
                view = view.with_label_attributes(self.config.label_attributes.clone());
            }
            if layout != Layout::Horizontal {
                debug!(element = %element.name, "checkable control draws its own label");
                return self.input.render(&view);
            }
            LabelParts::default()
        } else if kind == ElementKind::Button {
            LabelParts::default()
        } else {
            view = view.with_label_attributes(self.label_attributes_for(element, layout));
            LabelParts {
                open: self.label.open_tag(&view),
                content: html_escape(&label_text),
                close: self.label.close_tag(),
            }
        };

        let LabelParts {
            open,
            content,
            close,
        } = label;

        match layout {
            Layout::Vertical | Layout::Inline => {
                let input = self.input.render(&view);
                format!("{open}{content}{close}{input}")
            }
            Layout::Horizontal => {
                let mut class = "col-lg-10".to_string();
                if content.is_empty() {
                    class.push_str(" col-lg-offset-2");
                }

                let help_block = self.render_help_block(element);
                let errors = self.render_errors(&mut view);
                let input = self.input.render(&view);

                format!(
                    r#"{open}{content}{close}<div class="{class}">{input}{help_block}{errors}</div>"#
                )
            }
        }
    }

    /// Returns the label text, translated when a translator is installed.
    #[must_use]
    pub fn render_label(&self, element: &FormElement) -> String {
        match element.label.as_deref() {
            Some(label) if !label.is_empty() => self.translate(label),
            _ => String::new(),
        }
    }

    /// Adds the input error class to the view and renders its messages.
    ///
    /// Returns an empty string when error rendering is disabled.
    pub fn render_errors(&self, view: &mut ElementView<'_>) -> String {
        if view.element.has_messages() {
            if let Some(class) = self
                .config
                .input_error_class
                .as_deref()
                .filter(|c| !c.is_empty())
            {
                view.attributes.to_mut().add_class(class);
                trace!(element = %view.name(), class, "added input error class");
            }
        }

        if self.config.render_errors {
            self.errors.render(view)
        } else {
            String::new()
        }
    }

    /// Renders the help block from the `help-block` option, falling back to
    /// `description`.
    #[must_use]
    pub fn render_help_block(&self, element: &FormElement) -> String {
        let options = &element.options;
        let text = options
            .help_block
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(options.description.as_deref())
            .unwrap_or_default();

        if text.is_empty() {
            return String::new();
        }

        format!(
            r#"<p class="help-block">{}</p>"#,
            html_escape(&self.translate(text))
        )
    }

    fn translate(&self, text: &str) -> String {
        match &self.translator {
            Some(translator) => translator.translate(text, &self.config.translator_text_domain),
            None => text.to_string(),
        }
    }

    /// Merges the Bootstrap label classes for a labelled, non-checkable control.
    fn label_attributes_for(&self, element: &FormElement, layout: Layout) -> Attributes {
        let mut attributes = if element.label_attributes.is_empty() {
            self.config.label_attributes.clone()
        } else {
            element.label_attributes.clone()
        };

        let has_state = element
            .options
            .validation_state
            .as_deref()
            .is_some_and(|state| !state.is_empty());
        if has_state || element.has_messages() {
            attributes.add_class("control-label");
        }

        match layout {
            Layout::Inline => attributes.add_class("sr-only"),
            Layout::Horizontal => {
                attributes.add_class("col-lg-2");
                attributes.add_class("control-label");
            }
            Layout::Vertical => {}
        }

        trace!(element = %element.name, class = attributes.class(), "label classes");
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class_empty() {
        assert_eq!(RowRenderer::row_class(&FormElement::text("a")), "");
    }

    #[test]
    fn test_row_class_validation_state_and_messages() {
        let element = FormElement::text("a").validation_state("warning").message("bad");
        assert_eq!(RowRenderer::row_class(&element), " has-warning has-error");
    }

    #[test]
    fn test_row_class_column_size_is_not_space_separated() {
        let element = FormElement::text("a").message("bad").column_size("4");
        assert_eq!(RowRenderer::row_class(&element), " has-errorcol-lg-4");

        let element = FormElement::text("a").column_size("6");
        assert_eq!(RowRenderer::row_class(&element), "col-lg-6");
    }

    #[test]
    fn test_label_attributes_horizontal() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").label("A");
        let attrs = renderer.label_attributes_for(&element, Layout::Horizontal);
        assert_eq!(attrs.class(), "col-lg-2 control-label");
    }

    #[test]
    fn test_label_attributes_validation_then_horizontal() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").label("A").message("bad");
        let attrs = renderer.label_attributes_for(&element, Layout::Horizontal);
        assert_eq!(attrs.class(), "control-label col-lg-2");
    }

    #[test]
    fn test_label_attributes_inline() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").label_attr("class", "lbl");
        let attrs = renderer.label_attributes_for(&element, Layout::Inline);
        assert_eq!(attrs.class(), "lbl sr-only");
    }

    #[test]
    fn test_label_attributes_vertical_untouched() {
        let renderer =
            RowRenderer::new().label_attributes(Attributes::new().with("class", "default"));
        let element = FormElement::text("a");
        let attrs = renderer.label_attributes_for(&element, Layout::Vertical);
        assert_eq!(attrs.class(), "default");
    }

    #[test]
    fn test_label_attributes_empty_validation_state() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").label("A").validation_state("");
        let attrs = renderer.label_attributes_for(&element, Layout::Vertical);
        assert_eq!(attrs.class(), "");

        let element = element.validation_state("success");
        let attrs = renderer.label_attributes_for(&element, Layout::Vertical);
        assert_eq!(attrs.class(), "control-label");
    }

    #[test]
    fn test_label_attributes_merge_is_idempotent() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").message("bad");
        let once = renderer.label_attributes_for(&element, Layout::Horizontal);

        let mut again = element.clone();
        again.label_attributes = once.clone();
        let twice = renderer.label_attributes_for(&again, Layout::Horizontal);
        assert_eq!(once.class(), twice.class());
    }

    #[test]
    fn test_render_label_without_translator() {
        let renderer = RowRenderer::new();
        assert_eq!(renderer.render_label(&FormElement::text("a").label("Name")), "Name");
        assert_eq!(renderer.render_label(&FormElement::text("a")), "");
    }

    #[test]
    fn test_help_block_falls_back_to_description() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").help_block("").description("Details & more");
        assert_eq!(
            renderer.render_help_block(&element),
            r#"<p class="help-block">Details &amp; more</p>"#
        );
        assert_eq!(renderer.render_help_block(&FormElement::text("a")), "");
    }

    #[test]
    fn test_render_errors_adds_input_error_class() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a").attr("class", "form-control").message("bad");
        let mut view = ElementView::new(&element);
        let html = renderer.render_errors(&mut view);
        assert!(html.contains("bad"));
        assert_eq!(view.attributes.class(), "form-control input-error");
        assert_eq!(element.attributes.class(), "form-control");
    }

    #[test]
    fn test_render_errors_disabled() {
        let renderer = RowRenderer::new().show_errors(false);
        let element = FormElement::text("a").message("bad");
        let mut view = ElementView::new(&element);
        assert_eq!(renderer.render_errors(&mut view), "");
        assert_eq!(view.attributes.class(), "input-error");
    }

    #[test]
    fn test_render_errors_without_messages_leaves_class() {
        let renderer = RowRenderer::new();
        let element = FormElement::text("a");
        let mut view = ElementView::new(&element);
        renderer.render_errors(&mut view);
        assert_eq!(view.attributes.class(), "");
    }
}
