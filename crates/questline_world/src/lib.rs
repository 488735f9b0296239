//! Rooms, exits, items, and validated world construction for Questline.
//!
//! This crate provides:
//! - [`Room`] - A location with exits and loose items
//! - [`Egress`] - A directed, aliased exit from one room to another
//! - [`Item`] - Something lying in a room or carried by the player
//! - [`World`] - The validated room graph, built with [`build_world`]
//! - [`builtin`] - The compiled-in starter house
//!
//! Rooms keep their exits and items in persistent vectors, so cloning a
//! [`World`] is cheap and every later mutation is copy-on-write. A clone is
//! observationally a deep copy: one session never sees another's changes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtin;
pub mod item;
pub mod room;
pub mod world;

pub use builtin::{START_LABEL, default_rooms, default_world};
pub use item::Item;
pub use room::{Egress, Room};
pub use world::{World, build_world};
