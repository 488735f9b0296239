//! Input tokenization.
//!
//! Converts a raw line of player input into upper-case words.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input line.
    ///
    /// - Upper-cases the whole line
    /// - Splits on runs of whitespace
    /// - Whitespace-only input yields no tokens
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .to_uppercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }
}
