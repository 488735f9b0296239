//! Shared error types for Questline.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with optional context
//! - [`ErrorKind`] - Every failure the engine can report, one variant each
//! - [`Result`] - Convenience alias used by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result};
