//! The read/parse/advance/print loop.

use std::io::{self, Stdout, Write};

use questline_engine::State;
use questline_foundation::{Error, Result};
use questline_parser::{CommandParser, Verb};
use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// An interactive game session.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where narration and player-facing errors go.
    out: W,

    /// The game being played.
    state: State,

    /// Turns lines into commands.
    parser: CommandParser,

    /// Whether to describe the starting room before the first prompt.
    show_banner: bool,

    /// Prompt shown before each command.
    prompt: String,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a terminal session on stdout, configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(state: State, config: &RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, io::stdout(), state).with_config(config))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a session with the given editor and output.
    pub fn with_editor(editor: E, out: W, state: State) -> Self {
        Self {
            editor,
            out,
            state,
            parser: CommandParser::default(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Applies the banner and prompt settings from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &RuntimeConfig) -> Self {
        self.show_banner = config.show_banner;
        self.prompt.clone_from(&config.prompt);
        self
    }

    /// Disables the opening room description.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the game state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the output writer.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the session, returning the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until the player quits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if input or output fails, or a turn fails fatally.
    pub fn run(&mut self) -> Result<()> {
        info!(room = %self.state.current_label(), "session started");

        if self.show_banner {
            self.print_banner()?;
        }

        while self.step()? {}

        info!(room = %self.state.current_label(), "session ended");
        Ok(())
    }

    /// Reads and plays one line.
    ///
    /// Returns `Ok(true)` to keep going, `Ok(false)` once the session is over.
    ///
    /// # Errors
    ///
    /// Returns an error if input or output fails, or a turn fails fatally.
    pub fn step(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        let command = match self.parser.parse(trimmed) {
            Ok(command) => command,
            Err(e) => {
                self.print_error(&e)?;
                return Ok(true);
            }
        };

        if command.verb == Some(Verb::Quit) {
            self.write("Goodbye!\n")?;
            return Ok(false);
        }

        match self.state.advance(&command) {
            Ok(narration) => self.write(&narration.into_output())?,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                debug!(command = %command, error = %e, "turn rejected");
                self.print_error(&e)?;
            }
        }
        Ok(true)
    }

    fn print_banner(&mut self) -> Result<()> {
        let room = self.state.current_room();
        let banner = format!(
            "Welcome to Questline v{}\nType HELP for a list of commands.\n\n{}\n{}\n\n",
            env!("CARGO_PKG_VERSION"),
            room.name,
            room.description
        );
        self.write(&banner)
    }

    fn print_error(&mut self, error: &Error) -> Result<()> {
        self.write(&format!("{error}\n\n"))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::io(format!("could not write output: {e}")))
    }
}
