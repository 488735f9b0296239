//! Items that lie around in rooms or sit in the player's inventory.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Something the player can refer to by one of its aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Identifier, unique across the whole world.
    pub label: String,
    /// Short display name, e.g. "a toothbrush".
    pub name: String,
    /// Longer description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Words the player may type to refer to this item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

impl Item {
    /// Creates an item with no aliases.
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

    /// Returns true if `alias` is one of this item's aliases.
    ///
    /// Matching is exact; callers pass already upper-cased words.
    #[must_use]
    pub fn answers_to(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    pub(crate) fn normalize(&mut self) {
        for alias in &mut self.aliases {
            *alias = alias.to_uppercase();
        }
    }
}
