#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use twb_forms::helpers::{
    ElementView, ErrorsRenderer, InputRenderer, LabelRenderer, PartialContext, PartialRenderer,
    Translator,
};
use twb_forms::RowRenderer;

/// Renders `[input name class=...]`, exposing the classes the renderer derived.
pub struct StubInput;

impl InputRenderer for StubInput {
    fn render(&self, view: &ElementView<'_>) -> String {
        format!(
            "[input {} class={} label-class={}]",
            view.name(),
            view.attributes.class(),
            view.label_attributes.class()
        )
    }
}

/// Renders `<label class="...">` and `</label>`.
pub struct StubLabel;

impl LabelRenderer for StubLabel {
    fn open_tag(&self, view: &ElementView<'_>) -> String {
        format!(r#"<label class="{}">"#, view.label_attributes.class())
    }

    fn close_tag(&self) -> String {
        "</label>".to_string()
    }
}

/// Renders `[errors a|b]`, or nothing without messages.
pub struct StubErrors;

impl ErrorsRenderer for StubErrors {
    fn render(&self, view: &ElementView<'_>) -> String {
        if view.element.messages.is_empty() {
            return String::new();
        }
        format!("[errors {}]", view.element.messages.join("|"))
    }
}

/// Upper-cases everything and records the text domain it was asked for.
#[derive(Default, Clone)]
pub struct UpperTranslator {
    pub domains: Arc<Mutex<Vec<String>>>,
}

impl Translator for UpperTranslator {
    fn translate(&self, message: &str, text_domain: &str) -> String {
        if let Ok(mut domains) = self.domains.lock() {
            domains.push(text_domain.to_string());
        }
        message.to_uppercase()
    }
}

/// Echoes the partial name and the context it received.
pub struct StubPartial;

impl PartialRenderer for StubPartial {
    fn render(&self, partial: &str, context: &PartialContext<'_>) -> String {
        format!(
            "[partial {partial} element={} label={} label-class={} position={:?} errors={}]",
            context.element.name,
            context.label,
            context.label_attributes.class(),
            context.label_position,
            context.render_errors
        )
    }
}

/// A renderer with every collaborator stubbed.
pub fn renderer() -> RowRenderer {
    RowRenderer::new()
        .input_renderer(StubInput)
        .label_renderer(StubLabel)
        .errors_renderer(StubErrors)
}
