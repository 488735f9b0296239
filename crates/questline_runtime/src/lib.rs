//! Interactive session driver, world files, and CLI for Questline.
//!
//! This crate provides:
//! - [`Repl`] - The read/parse/advance/print loop around a game
//! - [`LineEditor`] implementations for terminals and plain readers
//! - [`RuntimeConfig`] - Settings gathered from the command line
//! - [`world_file`] - JSON world definitions
//! - [`logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod world_file;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, ReaderEditor, RustylineEditor};
pub use repl::Repl;
pub use world_file::LoadedWorld;
