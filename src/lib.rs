//! Questline - a small text adventure engine
//!
//! This crate re-exports all layers of the Questline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: questline_runtime    - REPL, world files, config, CLI
//! Layer 3: questline_engine     - Game state and the advance state machine
//! Layer 2: questline_parser     - Tokenizer, vocabulary, command parser
//! Layer 1: questline_world      - Rooms, exits, items, world validation
//! Layer 0: questline_foundation - Error types
//! ```

pub use questline_engine as engine;
pub use questline_foundation as foundation;
pub use questline_parser as parser;
pub use questline_runtime as runtime;
pub use questline_world as world;
