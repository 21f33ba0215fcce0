//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::core::accumulator::Command;
use crate::error::{AppError, AppResult};

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Startup, shutdown and warnings
    #[default]
    Normal,
    /// State transitions and failures
    Verbose,
    /// Every applied command
    Debug,
}

impl Verbosity {
    /// Maps `-v` occurrences and `-q` to a level
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Effective configuration for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log verbosity
    pub verbosity: Verbosity,
    /// Log destination; `None` keeps the TUI silent
    pub log_file: Option<PathBuf>,
    /// Key script for headless replay
    pub keys: Option<String>,
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and validates the configuration from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the key script contains a character
    /// with no calculator command.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let mut config = Self::new().with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet));
        if let Some(path) = &cli.log_file {
            config = config.with_log_file(path.clone());
        }
        if let Some(keys) = &cli.keys {
            config = config.with_keys(keys.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set headless key script
    #[must_use]
    pub fn with_keys(mut self, keys: impl Into<String>) -> Self {
        self.keys = Some(keys.into());
        self
    }

    /// True when a key script replaces the interactive TUI
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.keys.is_some()
    }

    /// Checks that every non-blank script character maps to a command
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] naming the first unknown character.
    pub fn validate(&self) -> AppResult<()> {
        let Some(keys) = &self.keys else {
            return Ok(());
        };
        if let Some((pos, c)) = keys
            .char_indices()
            .find(|&(_, c)| c != ' ' && Command::from_char(c).is_none())
        {
            return Err(AppError::config(format!(
                "unknown key '{c}' at position {pos} in --keys script"
            )));
        }
        Ok(())
    }

    /// Renders the configuration as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
