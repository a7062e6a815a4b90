//! Autofill context
//!
//! Header fields may name a context key in `autofill`. The caller supplies
//! the values at render time. A key with no value resolves to the empty
//! string: forms are routinely printed and completed by hand when the
//! upstream data is not available.

use std::collections::HashMap;

use tracing::debug;

/// Context key for the practice name
pub const PRACTICE_NAME: &str = "practiceName";

/// Caller-supplied autofill values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderContext {
    values: HashMap<String, String>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with only the practice name set
    pub fn for_practice(name: impl Into<String>) -> Self {
        Self::new().with(PRACTICE_NAME, name)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Value for `key`, or `""` when the context has none
    pub fn resolve(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => {
                debug!(key, "autofill key not in context; leaving field blank");
                ""
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for RenderContext {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenderContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
