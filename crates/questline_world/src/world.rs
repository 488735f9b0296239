//! The validated room graph.
//!
//! A [`World`] is built once from a list of room definitions and is then
//! treated as template data. Each session clones it; the persistent
//! collections underneath make that clone O(1) while keeping every session's
//! rooms and items independent.

use std::collections::HashSet;

use im::OrdMap;
use tracing::debug;

use questline_foundation::{Error, Result};

use crate::room::Room;

/// Every room in the game, keyed by label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    rooms: OrdMap<String, Room>,
}

impl World {
    /// Looks up a room by label.
    #[must_use]
    pub fn room(&self, label: &str) -> Option<&Room> {
        self.rooms.get(label)
    }

    /// Looks up a room by label for mutation.
    pub fn room_mut(&mut self, label: &str) -> Option<&mut Room> {
        self.rooms.get_mut(label)
    }

    /// Returns true if a room with this label exists.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.rooms.contains_key(label)
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the world has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over room labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Iterates over rooms in label order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
}

/// Builds and validates a world from room definitions.
///
/// Aliases are upper-cased on the way in. The definitions are rejected if:
/// - two rooms share a label,
/// - one room lists the same exit alias twice,
/// - two items anywhere share a label,
/// - an exit leads to a label that is not a room.
///
/// # Errors
///
/// Returns the first validation failure found, in definition order.
pub fn build_world<I>(room_defs: I) -> Result<World>
where
    I: IntoIterator<Item = Room>,
{
    let mut rooms = OrdMap::new();
    let mut item_labels = HashSet::new();

    for mut room in room_defs {
        room.normalize();

        if rooms.contains_key(&room.label) {
            return Err(Error::duplicate_room_label(room.label));
        }
        check_exit_aliases(&room)?;
        for item in &room.items {
            if !item_labels.insert(item.label.clone()) {
                return Err(Error::duplicate_item_label(item.label.clone()));
            }
        }

        rooms.insert(room.label.clone(), room);
    }

    // Destinations can only be checked once every room is known.
    for room in rooms.values() {
        for exit in &room.exits {
            if !rooms.contains_key(&exit.dest_label) {
                let alias = exit.aliases.first().cloned().unwrap_or_default();
                return Err(Error::unknown_destination(
                    room.label.clone(),
                    alias,
                    exit.dest_label.clone(),
                ));
            }
        }
    }

    debug!(rooms = rooms.len(), items = item_labels.len(), "built world");
    Ok(World { rooms })
}

fn check_exit_aliases(room: &Room) -> Result<()> {
    let mut seen = HashSet::new();
    for alias in room.exits.iter().flat_map(|exit| exit.aliases.iter()) {
        if !seen.insert(alias.as_str()) {
            return Err(Error::duplicate_egress_alias(room.label.clone(), alias.clone()));
        }
    }
    Ok(())
}
