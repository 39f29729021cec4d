//! Directory scanner for lister.
//!
//! Walks a single directory level on a background thread, stats every entry and publishes
//! one [Item] per entry on the item channel, in listing order.
//!
//! Failure handling is deliberately asymmetric:
//! - failing to resolve the target or to list it ends the scan with a [ScanError].
//! - failing to stat one entry skips that entry and the scan goes on.
//!
//! Neither case reaches the UI. Both only show up in the log.

use crate::core::classify::FileFormat;
use crate::core::fm::FileSystem;
use crate::core::item::Item;
use crate::core::pipeline::ItemSender;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Errors that end a whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unable to get current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("unable to read dir {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a scan that managed to list its directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Items handed to the item channel.
    pub emitted: usize,
    /// Entries skipped because they could not be stat'ed.
    pub skipped: usize,
    /// The consumer went away before every entry was sent.
    pub interrupted: bool,
}

/// Resolves the directory to scan, falling back to the current working directory.
pub fn resolve_target(target: Option<&Path>) -> Result<PathBuf, ScanError> {
    match target {
        Some(path) => {
            info!(path = %path.display(), "Path");
            Ok(path.to_path_buf())
        }
        None => {
            info!("No path, using current working directory");
            let current = std::env::current_dir().map_err(ScanError::CurrentDir)?;
            info!(path = %current.display(), "Current directory");
            Ok(current)
        }
    }
}

/// Produces the items of one directory.
pub struct DirectoryScanner<F> {
    fs: F,
    target: Option<PathBuf>,
}

impl<F: FileSystem> DirectoryScanner<F> {
    /// `target` of `None` scans the current working directory.
    pub fn new(fs: F, target: Option<PathBuf>) -> Self {
        Self { fs, target }
    }

    /// Runs the scan on the calling thread, blocking on every send.
    pub fn scan(&self, tx: &ItemSender) -> Result<ScanSummary, ScanError> {
        let path = resolve_target(self.target.as_deref())?;

        let names = self.fs.list(&path).map_err(|source| ScanError::ReadDir {
            path: path.clone(),
            source,
        })?;

        let mut summary = ScanSummary::default();

        for name in names {
            debug!(name = %name.to_string_lossy(), "Adding");
            let full_path = path.join(&name);

            let stat = match self.fs.stat(&full_path) {
                Ok(stat) => stat,
                Err(e) => {
                    warn!(name = %name.to_string_lossy(), error = %e, "Unable to get stat");
                    summary.skipped += 1;
                    continue;
                }
            };

            let format = FileFormat::from_is_text(!stat.is_dir() && self.fs.is_text(&full_path));
            let item = Item::from_entry(&path, &name, &stat, format);

            if tx.send(item).is_err() {
                debug!("Item channel closed, stopping scan");
                summary.interrupted = true;
                break;
            }
            summary.emitted += 1;
        }

        Ok(summary)
    }
}

impl<F: FileSystem + Send + 'static> DirectoryScanner<F> {
    /// Runs the scan on its own thread.
    ///
    /// Scan errors are logged and end the thread with `None`. The caller is free to drop the
    /// handle: the thread ends on its own once the scan is done or the channel is closed.
    pub fn spawn(self, tx: ItemSender) -> JoinHandle<Option<ScanSummary>> {
        thread::spawn(move || {
            info!("Scan started");
            match self.scan(&tx) {
                Ok(summary) => {
                    info!(
                        emitted = summary.emitted,
                        skipped = summary.skipped,
                        interrupted = summary.interrupted,
                        "Scan finished"
                    );
                    Some(summary)
                }
                Err(e) => {
                    error!(error = %e, "Scan aborted");
                    None
                }
            }
        })
    }
}
