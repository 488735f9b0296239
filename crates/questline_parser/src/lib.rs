//! Command parser for text adventure input.
//!
//! This crate turns a line the player typed, like "go east" or
//! "take water with cup", into a [`Command`] the game state can apply.
//!
//! # Architecture
//!
//! ```text
//! "take water with cup"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["TAKE", "WATER", "WITH", "CUP"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → TAKE is Verb::Take, which accepts an instrument
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SLOT            │  → recipient "WATER", instrument "CUP"
//! │ ASSIGNMENT      │
//! └─────────────────┘
//! ```
//!
//! The parser never checks whether the words refer to anything in the game;
//! that is the state machine's job.
//!
//! # Modules
//!
//! - [`tokenizer`] - Case folding and whitespace splitting
//! - [`vocabulary`] - Canonical verbs and the words that map to them
//! - [`command`] - The parsed command
//! - [`parser`] - Slot assignment and the [`parse_command`] entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use command::Command;
pub use parser::{CommandParser, parse_command};
pub use tokenizer::InputTokenizer;
pub use vocabulary::{Verb, Vocabulary, Word};
