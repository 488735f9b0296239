//! Runtime configuration.

use std::path::PathBuf;

use questline_foundation::Result;

use crate::world_file::{self, LoadedWorld};

/// Environment variable read for the log filter, before `RUST_LOG`.
pub const LOG_ENV: &str = "QUESTLINE_LOG";

/// Settings for one run of the game.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// JSON world file. `None` plays the built-in house.
    pub world_path: Option<PathBuf>,

    /// Whether to print the intro text before the first prompt.
    pub show_banner: bool,

    /// Prompt shown before each command.
    pub prompt: String,

    /// Log filter used when neither `QUESTLINE_LOG` nor `RUST_LOG` is set.
    pub log_filter: String,

    /// Number of commands kept in line-editor history.
    pub history_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            world_path: None,
            show_banner: true,
            prompt: "> ".to_string(),
            log_filter: "warn".to_string(),
            history_size: 100,
        }
    }
}

impl RuntimeConfig {
    /// Builder method to set the world file.
    #[must_use]
    pub fn with_world_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_path = Some(path.into());
        self
    }

    /// Builder method to enable or disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the fallback log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Loads the configured world: the file if one is set, else the built-in house.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or the world is invalid.
    pub fn load_world(&self) -> Result<LoadedWorld> {
        match &self.world_path {
            Some(path) => world_file::load_world_file(path),
            None => world_file::builtin(),
        }
    }
}
