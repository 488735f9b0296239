//! Error types for the Questline system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every message names the offending word so the player (and tests) can
//! tell failures apart by content, not just by kind.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Questline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns true if this error should end the session or abort startup.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    /// Creates a duplicate room label error.
    #[must_use]
    pub fn duplicate_room_label(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateRoomLabel(label.into()))
    }

    /// Creates a duplicate exit alias error.
    #[must_use]
    pub fn duplicate_egress_alias(room: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEgressAlias {
            room: room.into(),
            alias: alias.into(),
        })
    }

    /// Creates an error for an exit that leads nowhere.
    #[must_use]
    pub fn unknown_destination(
        room: impl Into<String>,
        alias: impl Into<String>,
        dest: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnknownDestination {
            room: room.into(),
            alias: alias.into(),
            dest: dest.into(),
        })
    }

    /// Creates a duplicate item label error.
    #[must_use]
    pub fn duplicate_item_label(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateItemLabel(label.into()))
    }

    /// Creates an unknown starting room error.
    #[must_use]
    pub fn unknown_start_room(label: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStartRoom(label.into()))
    }

    /// Creates an unknown verb error.
    #[must_use]
    pub fn unknown_verb(verb: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVerb(verb.into()))
    }

    /// Creates a no-such-exit error.
    #[must_use]
    pub fn no_such_exit(alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSuchExit(alias.into()))
    }

    /// Creates an unsupported LOOK target error.
    #[must_use]
    pub fn unsupported_target(target: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedTarget(target.into()))
    }

    /// Creates an unknown DEBUG target error.
    #[must_use]
    pub fn unknown_debug_target(target: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDebugTarget(target.into()))
    }

    /// Creates a missing recipient error for the given verb.
    #[must_use]
    pub fn missing_recipient(verb: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRecipient(verb.into()))
    }

    /// Creates a no-such-item error.
    #[must_use]
    pub fn no_such_item(alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSuchItem(alias.into()))
    }

    /// Creates a not-carrying error.
    #[must_use]
    pub fn not_carrying(alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotCarrying(alias.into()))
    }

    /// Creates an unsupported instrument error.
    #[must_use]
    pub fn unsupported_instrument(verb: impl Into<String>, instrument: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedInstrument {
            verb: verb.into(),
            instrument: instrument.into(),
        })
    }

    /// Creates an I/O error with a description of what was being attempted.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error (should not happen).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Creates a malformed world definition error.
    #[must_use]
    pub fn world_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::WorldFormat(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Two rooms in a world definition share a label.
    #[error("duplicate room label {0:?}")]
    DuplicateRoomLabel(String),

    /// One room lists the same alias on two exits (or twice on one exit).
    #[error("room {room:?} has more than one exit called {alias:?}")]
    DuplicateEgressAlias {
        /// Label of the offending room.
        room: String,
        /// The repeated alias.
        alias: String,
    },

    /// An exit points at a room label that does not exist.
    #[error("exit {alias:?} in room {room:?} leads to unknown room {dest:?}")]
    UnknownDestination {
        /// Label of the room holding the exit.
        room: String,
        /// First alias of the exit, for identification.
        alias: String,
        /// The label that could not be found.
        dest: String,
    },

    /// Two items anywhere in the world share a label.
    #[error("duplicate item label {0:?}")]
    DuplicateItemLabel(String),

    /// The requested starting room is not part of the world.
    #[error("starting room {0:?} does not exist")]
    UnknownStartRoom(String),

    /// The world definition could not be decoded.
    #[error("malformed world definition: {0}")]
    WorldFormat(String),

    /// The verb was not recognized, or is recognized but has no behavior yet.
    #[error("I don't know how to {0:?}")]
    UnknownVerb(String),

    /// No exit in the current room answers to the alias.
    #[error("{0:?} isn't a place you can go from here")]
    NoSuchExit(String),

    /// LOOK was given a target.
    #[error("I can't LOOK at particular things like {0:?} yet")]
    UnsupportedTarget(String),

    /// DEBUG was given something other than ROOM.
    #[error("I don't know how to debug {0:?}")]
    UnknownDebugTarget(String),

    /// QUIT reached the state machine instead of the driving loop.
    #[error("I can't QUIT; I'm not being executed by a quittable engine")]
    NotQuittable,

    /// A verb that needs a direct object was given none.
    #[error("{0} what?")]
    MissingRecipient(String),

    /// No item on the floor answers to the alias.
    #[error("there's no {0:?} here")]
    NoSuchItem(String),

    /// No carried item answers to the alias.
    #[error("you aren't carrying {0:?}")]
    NotCarrying(String),

    /// A verb was given an instrument it cannot use.
    #[error("I can't {verb} things with {instrument:?} yet")]
    UnsupportedInstrument {
        /// The verb that was attempted.
        verb: String,
        /// The instrument that was named.
        instrument: String,
    },

    /// A command without a verb was handed to the state machine.
    #[error("there's nothing to do")]
    EmptyCommand,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for errors that cannot be recovered from by asking the
    /// player for another command.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRoomLabel(_)
                | Self::DuplicateEgressAlias { .. }
                | Self::UnknownDestination { .. }
                | Self::DuplicateItemLabel(_)
                | Self::UnknownStartRoom(_)
                | Self::WorldFormat(_)
                | Self::Io(_)
                | Self::Internal(_)
        )
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file, if the error came from loading one.
    pub source: Option<String>,
    /// Chain of operations that led to the error, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
