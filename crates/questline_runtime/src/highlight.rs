//! Input highlighting for the REPL.

use std::borrow::Cow;

use questline_parser::Vocabulary;

/// Highlights the verb at the start of a command line.
pub struct VerbHighlighter {
    vocabulary: Vocabulary,
}

impl VerbHighlighter {
    /// Creates a highlighter for the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::standard(),
        }
    }

    /// Highlight a line of input.
    ///
    /// A known first word is shown bold cyan, an unknown one red. The rest
    /// of the line is left alone.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let start = line.len() - line.trim_start().len();
        let end = line[start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |i| start + i);
        let word = &line[start..end];
        if word.is_empty() {
            return Cow::Borrowed(line);
        }

        let color = if self.vocabulary.lookup(&word.to_uppercase()).is_some() {
            "\x1b[1;36m" // bold cyan
        } else {
            "\x1b[31m" // red
        };
        Cow::Owned(format!(
            "{}{color}{word}\x1b[0m{}",
            &line[..start],
            &line[end..]
        ))
    }
}

impl Default for VerbHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
