//! Convenience builder for HTTP query parameters.
//!
//! This module provides a lightweight helper for constructing URL query
//! strings from optional values, reducing boilerplate in feed crates.
//! Pairs render in insertion order and entries with absent values are
//! omitted entirely, so unset options fall back to the remote defaults.

use std::fmt::Display;

use crate::escape::escape_component;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append using a mapping function when the value is present.
    pub fn push_opt_with<T, F>(&mut self, key: &'static str, value: Option<T>, mut map: F)
    where
        F: FnMut(T) -> String,
    {
        if let Some(value) = value {
            self.pairs.push((key, map(value)));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the pairs as a `?key=value&key=value` query string.
    ///
    /// Keys and values are percent-escaped and joined in insertion
    /// order. With no pairs the result is the empty string, never a
    /// bare `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_pairs(&self.pairs)
    }
}

/// Render key/value pairs as a `?`-prefixed query string.
///
/// Shared by [`QueryParams::encode`] and callers that already hold a
/// pair list (for example typed option records).
#[must_use]
pub fn encode_pairs(pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", escape_component(key), escape_component(value)))
        .collect();

    format!("?{}", rendered.join("&"))
}
