//! Game state and the turn-by-turn state machine for Questline.
//!
//! This crate provides:
//! - [`State`] - The live session: a private copy of the world, the current
//!   room, and the inventory
//! - [`State::advance`] - Applies one [`Command`](questline_parser::Command)
//!   and returns a [`Narration`] or an error, never both
//! - [`Narration`] - The text produced by a successful turn
//!
//! `advance` does no I/O. The caller decides where narration goes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod help;
pub mod narration;
pub mod state;

pub use narration::Narration;
pub use state::State;
