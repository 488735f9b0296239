//! Main parser pipeline.
//!
//! Tokenizes a line, resolves the first word through the vocabulary, and
//! assigns the remaining words to the recipient and instrument slots.

use std::sync::LazyLock;

use questline_foundation::{Error, Result};
use tracing::trace;

use crate::command::Command;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Verb, Vocabulary};

static STANDARD: LazyLock<CommandParser> =
    LazyLock::new(|| CommandParser::new(Vocabulary::standard()));

/// Parses a line with the standard vocabulary.
///
/// Blank input is not an error: it yields [`Command::default`].
///
/// # Errors
///
/// Returns `UnknownVerb` naming the first word if it isn't in the vocabulary.
pub fn parse_command(line: &str) -> Result<Command> {
    STANDARD.parse(line)
}

/// Turns lines of player input into commands.
#[derive(Clone, Debug)]
pub struct CommandParser {
    vocabulary: Vocabulary,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl CommandParser {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Gets a reference to the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Expands a single-word direction such as `N` to its full form.
    fn direction(&self, word: &str) -> Option<&'static str> {
        self.vocabulary
            .lookup(word)
            .filter(|w| w.verb == Verb::Go)
            .and_then(|w| w.implied_recipient)
    }

    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVerb` naming the first word if it isn't in the vocabulary.
    pub fn parse(&self, line: &str) -> Result<Command> {
        let tokens = InputTokenizer::tokenize(line);

        let Some((first, mut rest)) = tokens.split_first() else {
            return Ok(Command::default());
        };

        let word = self
            .vocabulary
            .lookup(first)
            .ok_or_else(|| Error::unknown_verb(first.as_str()))?;
        let verb = word.verb;

        // A lead-in with nothing after it is kept as the recipient.
        if let Some((head, tail)) = rest.split_first() {
            if !tail.is_empty() && verb.lead_ins().contains(&head.as_str()) {
                rest = tail;
            }
        }

        let (recipient, instrument) = if verb.takes_instrument() {
            match rest
                .iter()
                .position(|t| self.vocabulary.is_instrument_marker(t))
            {
                Some(at) => (&rest[..at], Some(&rest[at + 1..])),
                None => (rest, None),
            }
        } else {
            (rest, None)
        };

        let mut command = Command::new(verb).with_recipient(recipient.join(" "));
        if command.recipient.is_empty() {
            if let Some(implied) = word.implied_recipient {
                command.recipient = implied.to_string();
            }
        } else if verb == Verb::Go {
            if let Some(direction) = self.direction(&command.recipient) {
                command.recipient = direction.to_string();
            }
        }
        if let Some(instrument) = instrument.filter(|words| !words.is_empty()) {
            command.instrument = Some(instrument.join(" "));
        }

        trace!(input = line, %command, "parsed command");
        Ok(command)
    }
}
