//! Error types for forms.

use thiserror::Error;

/// Errors raised while loading form definitions.
///
/// Rendering itself never fails; these only come out of the JSON loaders.
#[derive(Debug, Error)]
pub enum FormError {
    /// The render configuration could not be parsed.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// A form element definition could not be parsed.
    #[error("invalid form element: {0}")]
    InvalidElement(#[source] serde_json::Error),

    /// A translation catalog could not be parsed.
    #[error("invalid translation catalog: {0}")]
    InvalidCatalog(#[source] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
