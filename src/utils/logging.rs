//! Log file setup.
//!
//! All diagnostics go to a local log file, never to the terminal, since the terminal belongs
//! to the UI. The file is opened in append mode and written through a non-blocking writer.
//! The returned [WorkerGuard] flushes pending lines when dropped, so `main` keeps it alive
//! until it returns.

use crate::config::InternalGeneral;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("unable to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Opens (or creates) `path` for appending.
pub fn open_log_file(path: &Path) -> Result<File, LogInitError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogInitError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global subscriber writing to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(general: &InternalGeneral) -> Result<WorkerGuard, LogInitError> {
    let file = open_log_file(general.log_file())?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_filter()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter)
        .try_init()?;

    Ok(guard)
}
