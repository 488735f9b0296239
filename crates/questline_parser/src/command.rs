//! The parsed form of one line of input.

use std::fmt;

use crate::vocabulary::Verb;

/// A parsed command ready for the game state.
///
/// The default value has no verb; the parser returns it for blank lines to
/// mean "nothing to do, ask again".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// The canonical verb, `None` for a blank line.
    pub verb: Option<Verb>,
    /// Direct object: an exit alias for GO, an item alias for TAKE/DROP.
    /// Empty when the player named nothing.
    pub recipient: String,
    /// Indirect object introduced by "WITH", for verbs that accept one.
    pub instrument: Option<String>,
}

impl Command {
    /// Creates a command with no objects.
    #[must_use]
    pub fn new(verb: Verb) -> Self {
        Self {
            verb: Some(verb),
            ..Self::default()
        }
    }

    /// Sets the recipient.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Sets the instrument.
    #[must_use]
    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    /// Returns true for the blank-line command.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verb.is_none()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(verb) = self.verb else {
            return Ok(());
        };
        write!(f, "{verb}")?;
        if !self.recipient.is_empty() {
            write!(f, " {}", self.recipient)?;
        }
        if let Some(instrument) = &self.instrument {
            write!(f, " WITH {instrument}")?;
        }
        Ok(())
    }
}
