//! HTML attribute bags and CSS class token helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::helpers::html_escape;

/// HTML attributes of an element or of its label.
///
/// Keys are kept sorted so rendered markup is stable between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    /// Attribute values keyed by attribute name.
    pub attrs: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Returns whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Returns the `class` attribute, or an empty string.
    #[must_use]
    pub fn class(&self) -> &str {
        self.get("class").unwrap_or_default()
    }

    /// Adds `token` to the `class` attribute unless it is already present.
    pub fn add_class(&mut self, token: &str) {
        let merged = merge_class(self.class(), token);
        self.set("class", merged);
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders attributes as an HTML attribute string with escaped values.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Returns whether the whitespace-delimited class list contains `token`.
///
/// Matching is case-sensitive and on whole tokens only, so `col-lg-2`
/// does not match `col-lg-20`.
#[must_use]
pub fn has_class(classes: &str, token: &str) -> bool {
    classes.split_whitespace().any(|c| c == token)
}

/// Appends `token` to a class list unless it is already one of its tokens.
///
/// An empty list becomes `token`. An existing list is returned unchanged when
/// the token is present, otherwise the token is appended after a single space
/// and the result trimmed.
#[must_use]
pub fn merge_class(classes: &str, token: &str) -> String {
    if classes.trim().is_empty() {
        token.to_string()
    } else if has_class(classes, token) {
        classes.to_string()
    } else {
        format!("{classes} {token}").trim().to_string()
    }
}
