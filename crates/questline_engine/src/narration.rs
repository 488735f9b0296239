//! Narration produced by a successful turn.

use std::fmt;

/// Text describing what happened.
///
/// The body is the bare text. The rendered form (via [`fmt::Display`] or
/// [`Narration::into_output`]) ends with a blank line to separate turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Narration {
    body: String,
}

impl Narration {
    /// Wraps narration text.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The bare narration text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the narration, returning the text followed by a blank line.
    #[must_use]
    pub fn into_output(mut self) -> String {
        self.body.push_str("\n\n");
        self.body
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", self.body)
    }
}
