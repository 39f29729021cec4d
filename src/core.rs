//! Core runtime logic for lister.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory listing and entry stats behind the [FileSystem] trait.
//! - [classify]: best-effort text/binary classification of files.
//! - [item]: the immutable [Item] value shown by the UI.
//! - [formatter]: formatting helpers for modes, times and pane-width strings.
//! - [scanner]: the [DirectoryScanner] producing items on its own thread.
//! - [pipeline]: the item channel and the shutdown signal connecting the threads.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod classify;
pub mod fm;
pub mod formatter;
pub mod item;
pub mod pipeline;
pub mod scanner;
pub mod terminal;

pub use classify::{FileFormat, is_text, is_text_file};
pub use fm::{EntryStat, FileSystem, LocalFs};
pub use formatter::{format_file_time, format_mode, sanitize_to_exact_width};
pub use item::Item;
pub use pipeline::{
    ItemReceiver, ItemSender, ShutdownListener, ShutdownSignal, item_channel, shutdown_channel,
};
pub use scanner::{DirectoryScanner, ScanError, ScanSummary, resolve_target};
