//! Application lifecycle: wiring the threads together and tearing them down.
//!
//! [Application::start] builds the item channel, the shutdown signal and the update queue,
//! then starts the scanner and the ingestion loop. The returned [Session] owns the UI side.
//! [Session::finish] is the shutdown barrier: it returns once the ingestion loop has stopped.
//!
//! The scanner thread is never joined. It ends on its own once the ingestion loop drops
//! the item receiver.

use crate::app::controller::{UpdateQueue, update_queue};
use crate::app::ingest::{IngestLoop, IngestReport};
use crate::app::state::AppState;
use crate::config::Config;
use crate::core::terminal;
use crate::core::{
    DirectoryScanner, FileSystem, LocalFs, ScanSummary, ShutdownSignal, item_channel,
    shutdown_channel,
};
use crate::utils::shorten_home_path;

use tracing::{info, warn};

use std::io;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

pub struct Application {
    config: Config,
    target: Option<PathBuf>,
}

impl Application {
    /// `target` of `None` lists the current working directory.
    pub fn new(config: Config, target: Option<PathBuf>) -> Self {
        Self { config, target }
    }

    /// Starts the scanner and the ingestion loop over `fs`.
    ///
    /// Returns immediately. Items show up on the session's state as [Session::pump] runs.
    pub fn start<F: FileSystem + Send + 'static>(&self, fs: F) -> Session<'_> {
        let general = self.config.general();
        let (item_tx, item_rx) = item_channel(general.item_buffer());
        let (signal, listener) = shutdown_channel(general.shutdown_buffer());
        let (controller, queue) = update_queue();

        let scanner = DirectoryScanner::new(fs, self.target.clone()).spawn(item_tx);
        let ingest = IngestLoop::new(item_rx, listener, controller).spawn();

        let mut state = AppState::new(&self.config, signal.clone());
        state.set_list_title(list_title(self.target.as_deref()));

        Session {
            state,
            queue,
            signal,
            ingest,
            scanner,
        }
    }

    /// Runs lister on the local filesystem until the user quits.
    ///
    /// If the UI fails, shutdown is still requested and awaited before the error is returned.
    pub fn run(self) -> io::Result<()> {
        info!("Starting application...");
        self.drive(LocalFs, |session| session.run_ui())
    }

    /// Starts a session over `fs`, hands it to `ui` and shuts it down once `ui` returns.
    fn drive<F, U>(&self, fs: F, ui: U) -> io::Result<()>
    where
        F: FileSystem + Send + 'static,
        U: FnOnce(&mut Session<'_>) -> io::Result<()>,
    {
        let mut session = self.start(fs);

        let result = ui(&mut session);
        if let Err(e) = &result {
            warn!(error = %e, "UI stopped with an error, shutting down");
            session.request_shutdown();
        }

        session.finish();
        result
    }
}

/// The UI side of a started [Application].
pub struct Session<'a> {
    state: AppState<'a>,
    queue: UpdateQueue,
    signal: ShutdownSignal,
    ingest: JoinHandle<IngestReport>,
    scanner: JoinHandle<Option<ScanSummary>>,
}

impl<'a> Session<'a> {
    #[inline]
    pub fn state(&self) -> &AppState<'a> {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut AppState<'a> {
        &mut self.state
    }

    /// Applies every queued UI update. Returns true if anything changed.
    pub fn pump(&mut self) -> bool {
        self.state.tick(&self.queue)
    }

    /// Sends a shutdown token without blocking. Safe to call more than once.
    pub fn request_shutdown(&self) {
        self.signal.trigger();
    }

    /// True once the scanner thread has ended, whatever the outcome.
    pub fn scan_finished(&self) -> bool {
        self.scanner.is_finished()
    }

    /// Takes over the terminal and runs the event loop until a quit key is pressed.
    pub fn run_ui(&mut self) -> io::Result<()> {
        terminal::run_terminal(&mut self.state, &self.queue)
    }

    /// Waits for the ingestion loop to stop and returns its report.
    ///
    /// Must follow a shutdown request (a quit key or [Session::request_shutdown]). Dropping
    /// the UI side's signals also counts as one, so this cannot wait forever.
    pub fn finish(self) -> IngestReport {
        let Session {
            state,
            queue,
            signal,
            ingest,
            scanner: _,
        } = self;
        drop(state);
        drop(signal);

        info!("Waiting until no longer receiving new item...");
        let report = match ingest.join() {
            Ok(report) => report,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        drop(queue);
        info!(delivered = report.delivered, "Stopped");
        report
    }
}

fn list_title(target: Option<&Path>) -> String {
    match target {
        Some(path) => shorten_home_path(path),
        None => std::env::current_dir()
            .map(shorten_home_path)
            .unwrap_or_else(|_| ".".to_string()),
    }
}
