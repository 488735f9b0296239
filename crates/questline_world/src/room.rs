//! Rooms and the exits between them.

use std::fmt;

use im::Vector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A directed, aliased exit from one room to another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Egress {
    /// Label of the room this exit leads to.
    pub dest_label: String,
    /// Long-form description shown in the exits listing.
    pub description: String,
    /// Narration shown when the player goes through.
    pub travel_message: String,
    /// Words that select this exit, unique within the owning room.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

impl Egress {
    /// Creates an exit with no aliases.
    #[must_use]
    pub fn new(
        dest_label: impl Into<String>,
        description: impl Into<String>,
        travel_message: impl Into<String>,
    ) -> Self {
        Self {
            dest_label: dest_label.into(),
            description: description.into(),
            travel_message: travel_message.into(),
            aliases: Vec::new(),
        }
    }

    /// Adds aliases.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Returns true if `alias` selects this exit.
    #[must_use]
    pub fn answers_to(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}

/// A location in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Identifier, unique across the whole world. Never shown to the player.
    pub label: String,
    /// Short display name.
    pub name: String,
    /// Text shown on LOOK.
    pub description: String,
    /// Exits in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: Vector<Egress>,
    /// Items lying on the floor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vector<Item>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            description: description.into(),
            exits: Vector::new(),
            items: Vector::new(),
        }
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, exit: Egress) -> Self {
        self.exits.push_back(exit);
        self
    }

    /// Adds an item to the floor.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push_back(item);
        self
    }

    /// Finds the exit that answers to `alias`.
    ///
    /// The world loader rejects rooms where two exits share an alias, so at
    /// most one exit can match.
    #[must_use]
    pub fn find_egress_by_alias(&self, alias: &str) -> Option<&Egress> {
        self.exits.iter().find(|exit| exit.answers_to(alias))
    }

    /// Finds the first item on the floor that answers to `alias`.
    #[must_use]
    pub fn find_item_by_alias(&self, alias: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.answers_to(alias))
    }

    /// Removes the first item with the given label and hands it back.
    ///
    /// Removing a label that isn't here does nothing.
    pub fn remove_item(&mut self, label: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.label == label)?;
        Some(self.items.remove(index))
    }

    /// Puts an item on the floor.
    pub fn add_item(&mut self, item: Item) {
        self.items.push_back(item);
    }

    /// Upper-cases every exit and item alias so they match parser output.
    pub(crate) fn normalize(&mut self) {
        for exit in self.exits.iter_mut() {
            for alias in &mut exit.aliases {
                *alias = alias.to_uppercase();
            }
        }
        for item in self.items.iter_mut() {
            item.normalize();
        }
    }
}

/// Structured dump used by `DEBUG ROOM`.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROOM {} ({:?})", self.label, self.name)?;
        writeln!(f, "exits:")?;
        if self.exits.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for exit in &self.exits {
            writeln!(f, "  {} -> {}", exit.aliases.join("/"), exit.dest_label)?;
        }
        write!(f, "items:")?;
        if self.items.is_empty() {
            write!(f, "\n  (none)")?;
        }
        for item in &self.items {
            write!(
                f,
                "\n  {} {:?} [{}]",
                item.label,
                item.name,
                item.aliases.join("/")
            )?;
        }
        Ok(())
    }
}
