//! Verb vocabulary.
//!
//! Maps the words a player may type first on a line to canonical verbs.
//! Direction words are verbs too: "EAST" alone means "GO EAST".

use std::collections::HashMap;
use std::fmt;

/// A canonical action keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Describe the current room.
    Look,
    /// List the exits of the current room.
    Exits,
    /// Show the command reference.
    Help,
    /// End the game. Handled by the session driver, not the state machine.
    Quit,
    /// Dump internal state.
    Debug,
    /// Pick up an item.
    Take,
    /// Put down a carried item.
    Drop,
    /// List carried items.
    Inventory,
    /// Talk to someone. Recognized but not implemented.
    Talk,
    /// Use an item. Recognized but not implemented.
    Use,
}

impl Verb {
    /// The canonical spelling shown to the player.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::Look => "LOOK",
            Self::Exits => "EXITS",
            Self::Help => "HELP",
            Self::Quit => "QUIT",
            Self::Debug => "DEBUG",
            Self::Take => "TAKE",
            Self::Drop => "DROP",
            Self::Inventory => "INVENTORY",
            Self::Talk => "TALK",
            Self::Use => "USE",
        }
    }

    /// Whether "WITH x" after the recipient names an instrument.
    #[must_use]
    pub const fn takes_instrument(self) -> bool {
        matches!(self, Self::Take | Self::Use)
    }

    /// Filler words that may sit between the verb and its recipient
    /// ("GO TO HALL", "LOOK AT DOOR") and are dropped.
    #[must_use]
    pub const fn lead_ins(self) -> &'static [&'static str] {
        match self {
            Self::Go => &["TO"],
            Self::Look => &["AT"],
            Self::Talk => &["TO", "WITH"],
            _ => &[],
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a known first word means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    /// The verb the word stands for.
    pub verb: Verb,
    /// Recipient to use when the player typed nothing after the word.
    /// Set for bare directions, e.g. "N" implies "NORTH".
    pub implied_recipient: Option<&'static str>,
}

/// Runtime storage for the verb synonym table and instrument markers.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Surface word -> meaning
    words: HashMap<String, Word>,
    /// Words separating the recipient from the instrument
    instrument_markers: Vec<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The vocabulary the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();

        vocab.register_verb(Verb::Go, ["GO", "MOVE", "WALK"]);
        vocab.register_verb(Verb::Look, ["LOOK", "L"]);
        vocab.register_verb(Verb::Exits, ["EXITS"]);
        vocab.register_verb(Verb::Help, ["HELP", "?"]);
        vocab.register_verb(Verb::Quit, ["QUIT", "EXIT", "Q"]);
        vocab.register_verb(Verb::Debug, ["DEBUG"]);
        vocab.register_verb(Verb::Take, ["TAKE", "GET"]);
        vocab.register_verb(Verb::Drop, ["DROP", "PUT"]);
        vocab.register_verb(Verb::Inventory, ["INVENTORY", "INV", "I"]);
        vocab.register_verb(Verb::Talk, ["TALK", "SPEAK"]);
        vocab.register_verb(Verb::Use, ["USE"]);

        vocab.register_direction("NORTH", ["N"]);
        vocab.register_direction("SOUTH", ["S"]);
        vocab.register_direction("EAST", ["E"]);
        vocab.register_direction("WEST", ["W"]);
        vocab.register_direction("NORTHEAST", ["NE"]);
        vocab.register_direction("NORTHWEST", ["NW"]);
        vocab.register_direction("SOUTHEAST", ["SE"]);
        vocab.register_direction("SOUTHWEST", ["SW"]);
        vocab.register_direction("UP", ["U"]);
        vocab.register_direction("DOWN", ["D"]);

        vocab.register_instrument_marker("WITH");
        vocab.register_instrument_marker("USING");

        vocab
    }

    /// Registers words that all mean `verb`.
    ///
    /// Later registrations of the same word win.
    pub fn register_verb<I, S>(&mut self, verb: Verb, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.words.insert(
                word.into(),
                Word {
                    verb,
                    implied_recipient: None,
                },
            );
        }
    }

    /// Registers a direction and its abbreviations as movement words.
    pub fn register_direction<I>(&mut self, canonical: &'static str, abbreviations: I)
    where
        I: IntoIterator<Item = &'static str>,
    {
        let word = Word {
            verb: Verb::Go,
            implied_recipient: Some(canonical),
        };
        self.words.insert(canonical.to_string(), word);
        for abbreviation in abbreviations {
            self.words.insert(abbreviation.to_string(), word);
        }
    }

    /// Registers a word that introduces an instrument.
    pub fn register_instrument_marker(&mut self, marker: impl Into<String>) {
        self.instrument_markers.push(marker.into());
    }

    /// Looks up an upper-case first word.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Word> {
        self.words.get(word).copied()
    }

    /// Returns true if `word` separates recipient from instrument.
    #[must_use]
    pub fn is_instrument_marker(&self, word: &str) -> bool {
        self.instrument_markers.iter().any(|m| m == word)
    }

    /// All known first words, sorted. Used for completion.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
