//! Tokenizer tests.
//!
//! Tests for converting raw input to upper-case words.

use questline_parser::InputTokenizer;

#[test]
fn tokenize_simple_command() {
    assert_eq!(InputTokenizer::tokenize("take notebook"), vec!["TAKE", "NOTEBOOK"]);
}

#[test]
fn tokenize_collapses_whitespace() {
    assert_eq!(
        InputTokenizer::tokenize("\t go   \n  east  "),
        vec!["GO", "EAST"]
    );
}

#[test]
fn tokenize_keeps_punctuation() {
    assert_eq!(InputTokenizer::tokenize("help ?"), vec!["HELP", "?"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize("    ").is_empty());
}
