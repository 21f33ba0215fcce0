//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive runs only log when a file is
//! given. Headless replay logs to stderr, leaving stdout for the display.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file
    File(PathBuf),
    /// Standard error
    Stderr,
    /// No subscriber installed
    Disabled,
}

impl LogSink {
    /// Picks the sink for a configuration
    #[must_use]
    pub fn for_config(config: &AppConfig) -> Self {
        match &config.log_file {
            Some(path) => Self::File(path.clone()),
            None if config.is_headless() => Self::Stderr,
            None => Self::Disabled,
        }
    }
}

/// Builds the filter; `RUST_LOG` wins over the verbosity flags
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
///
/// # Errors
///
/// Returns [`AppError::Io`] if the log file cannot be opened and
/// [`AppError::Terminal`] if a subscriber is already installed.
pub fn init(config: &AppConfig) -> AppResult<LogSink> {
    let sink = LogSink::for_config(config);
    let filter = env_filter(config);

    let installed = match &sink {
        LogSink::Disabled => return Ok(LogSink::Disabled),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        LogSink::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| AppError::terminal(format!("failed to install logger: {e}")))?;
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_defaults_to_disabled() {
        assert_eq!(LogSink::for_config(&AppConfig::new()), LogSink::Disabled);
    }

    #[test]
    fn test_sink_headless_uses_stderr() {
        let config = AppConfig::new().with_keys("1+1=");
        assert_eq!(LogSink::for_config(&config), LogSink::Stderr);
    }

    #[test]
    fn test_sink_file_wins() {
        let config = AppConfig::new()
            .with_keys("1+1=")
            .with_log_file("calc.log");
        assert_eq!(
            LogSink::for_config(&config),
            LogSink::File(PathBuf::from("calc.log"))
        );
    }

    #[test]
    fn test_init_disabled_installs_nothing() {
        let sink = init(&AppConfig::new()).unwrap();
        assert_eq!(sink, LogSink::Disabled);
    }

    #[test]
    fn test_init_unwritable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new().with_log_file(dir.path().join("missing").join("calc.log"));
        assert!(matches!(init(&config), Err(AppError::Io(_))));
    }
}
