//! # twb-forms
//!
//! Bootstrap 3 form rows: label, control, help text and validation messages
//! laid out for horizontal, inline or vertical forms.
//!
//! This crate provides:
//! - Form element definitions with layout and validation options
//! - A row renderer applying Bootstrap 3 layout conventions
//! - Pluggable collaborators for controls, labels, errors and translation
//! - Bootstrap 3 defaults for every collaborator
//!
//! ## Quick Start
//!
//! ```rust
//! use twb_forms::{FormElement, Layout, RowRenderer};
//!
//! let renderer = RowRenderer::new();
//!
//! let email = FormElement::text("email")
//!     .attr("id", "email")
//!     .attr("class", "form-control")
//!     .label("Email")
//!     .help_block("We will never share your email")
//!     .message("Value is required");
//!
//! let html = renderer.render(&email);
//! assert!(html.contains("has-error"));
//! assert!(html.contains(r#"<p class="help-block">We will never share your email</p>"#));
//!
//! let inline = FormElement::text("q").label("Search").layout(Layout::Inline);
//! assert!(renderer.render(&inline).contains("sr-only"));
//! ```
//!
//! ## Loading definitions
//!
//! ```rust
//! use twb_forms::{FormElement, RenderConfig, RowRenderer};
//!
//! let config = RenderConfig::from_json(r#"{"input-error-class": "is-invalid"}"#).unwrap();
//! let element = FormElement::from_json(
//!     r#"{"name": "age", "label": "Age", "options": {"column-size": "4"}}"#,
//! )
//! .unwrap();
//!
//! let html = RowRenderer::with_config(config).render(&element);
//! assert!(html.starts_with(r#"<div class="form-group col-lg-4">"#));
//! ```

mod attributes;
mod config;
mod element;
mod error;
pub mod helpers;
mod layout;
mod row;

pub use attributes::{has_class, merge_class, Attributes};
pub use config::{LabelPosition, RenderConfig};
pub use element::{ElementKind, ElementOptions, FormElement};
pub use error::{FormError, Result};
pub use layout::Layout;
pub use row::RowRenderer;
