//! Logging collaborator handed to game drivers
//!
//! Each logger owns its own `tracing` dispatch built from a
//! `tracing-subscriber` formatter. Nothing is installed globally: events only
//! reach the logger's writer while running inside [`GameLogger::in_scope`],
//! so two drivers with different loggers never see each other's output and
//! the grid engine itself stays silent.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

use crate::io::error::{Result, file_system_error};

/// Injected event sink for drivers
#[derive(Debug, Clone)]
pub struct GameLogger {
    dispatch: Dispatch,
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::disabled()
    }
}

impl GameLogger {
    /// Log to standard error at `level` and above
    pub fn stderr(level: Level) -> Self {
        Self::with_writer(level, std::io::stderr)
    }

    /// Log to a newly created (or truncated) file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created
    pub fn to_file(path: &Path, level: Level) -> Result<Self> {
        let file = File::create(path)
            .map_err(|source| file_system_error(path, "create log file", source))?;
        Ok(Self::with_writer(level, Mutex::new(file)))
    }

    /// Log to any `tracing-subscriber` writer
    pub fn with_writer<W>(level: Level, writer: W) -> Self
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Discard every event
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Run `f` with this logger receiving its `tracing` events
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
