//! Integration tests for the questline_parser crate.
//!
//! Tests for the command parsing pipeline:
//! - Tokenization
//! - Vocabulary lookup
//! - Full parser pipeline

mod tokenizer_tests;
mod vocabulary_tests;
