//! Constant attribute composition.
//!
//! Attributes are a flat list of string key/value pairs merged into every
//! emitted record. They come from two places: the Lambda execution context
//! (invocation id and function ARN) and caller-selected environment
//! variables.

use std::env;

/// The attributes attached to every record emitted by a handler.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConstantFields {
    entries: Vec<(String, String)>,
}

impl ConstantFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_owned(), value.to_owned()));
    }

    /// Add one attribute per named environment variable that is set,
    /// keyed by the lower-cased variable name.
    ///
    /// Empty names and variables that are unset or not valid unicode are
    /// skipped silently.
    pub(crate) fn extend_from_env<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }
            if let Ok(value) = env::var(name) {
                self.entries.push((name.to_lowercase(), value));
            }
        }
    }

    pub(crate) fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}
