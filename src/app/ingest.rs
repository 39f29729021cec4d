//! The ingestion loop.
//!
//! Runs on its own thread between the scanner and the UI. Every item arriving on the item
//! channel is handed to the [UiController]; a token on the shutdown signal ends the loop.
//!
//! ```text
//! Running --(shutdown observed)--> Draining --(item receiver dropped)--> Stopped
//! ```
//!
//! The loop blocks on both conduits at once instead of polling them. A pending shutdown is
//! checked before every wait, so it wins over items still sitting in the channel.

use crate::app::controller::UiController;
use crate::core::{Item, ItemReceiver, ShutdownListener};

use crossbeam_channel::select;
use tracing::{debug, info, warn};

use std::thread::{self, JoinHandle};

/// Lifecycle of the ingestion loop. There is no way back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IngestState {
    Running,
    Draining,
    Stopped,
}

/// Returned by the loop's thread once it has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Items handed to the UI controller.
    pub delivered: usize,
}

enum Event {
    Shutdown,
    Item(Item),
    ItemsClosed,
}

pub struct IngestLoop {
    items: Option<ItemReceiver>,
    shutdown: ShutdownListener,
    controller: UiController,
    state: IngestState,
    delivered: usize,
}

impl IngestLoop {
    pub fn new(items: ItemReceiver, shutdown: ShutdownListener, controller: UiController) -> Self {
        Self {
            items: Some(items),
            shutdown,
            controller,
            state: IngestState::Running,
            delivered: 0,
        }
    }

    /// Starts the loop on its own thread. Joining the handle is the shutdown barrier.
    pub fn spawn(self) -> JoinHandle<IngestReport> {
        thread::spawn(move || self.run())
    }

    /// Runs until a shutdown is observed, then reports.
    pub fn run(mut self) -> IngestReport {
        info!("Ingestion loop started");
        while self.state == IngestState::Running {
            self.step();
        }
        info!(delivered = self.delivered, "No longer receiving new items");

        IngestReport {
            delivered: self.delivered,
        }
    }

    /// Waits for the next event on either conduit and handles it.
    fn step(&mut self) {
        if self.shutdown.is_pending() {
            self.stop();
            return;
        }

        let shutdown = self.shutdown.receiver();
        // Any outcome on the shutdown receiver, token or disconnect, means stop
        let event = match &self.items {
            Some(items) => select! {
                recv(shutdown) -> _ => Event::Shutdown,
                recv(items) -> msg => match msg {
                    Ok(item) => Event::Item(item),
                    Err(_) => Event::ItemsClosed,
                },
            },
            None => {
                let _ = shutdown.recv();
                Event::Shutdown
            }
        };

        match event {
            Event::Shutdown => self.stop(),
            Event::Item(item) => self.deliver(item),
            Event::ItemsClosed => {
                debug!("Item channel closed, waiting for shutdown");
                self.items = None;
            }
        }
    }

    fn deliver(&mut self, item: Item) {
        debug!(title = item.title(), "Receiving newly added item");
        if self.controller.append(item).is_err() {
            warn!("UI update queue closed, stopping ingestion");
            self.stop();
            return;
        }
        self.delivered += 1;
    }

    fn stop(&mut self) {
        self.state = IngestState::Draining;
        debug!("Shutdown observed, closing item channel");
        // Dropping the receiver makes any blocked scanner send fail instead of hanging
        self.items = None;
        self.state = IngestState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::update_queue;
    use crate::core::{EntryStat, FileFormat, item_channel, shutdown_channel};

    use std::ffi::OsString;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn item(name: &str) -> Item {
        Item::from_entry(
            &PathBuf::from("/data"),
            &OsString::from(name),
            &EntryStat::new(1, "-rw-r--r--", false),
            FileFormat::Bin,
        )
    }

    #[test]
    fn pending_shutdown_wins_over_queued_items() -> Result<(), Box<dyn std::error::Error>> {
        let (item_tx, item_rx) = item_channel(16);
        let (signal, listener) = shutdown_channel(2);
        let (controller, _queue) = update_queue();

        for i in 0..16 {
            item_tx.send(item(&format!("f{i}")))?;
        }
        signal.trigger();

        let report = IngestLoop::new(item_rx, listener, controller).run();
        assert_eq!(report.delivered, 0);

        // The consumer side is gone, so the producer is not left blocked
        assert!(item_tx.send(item("late")).is_err());
        Ok(())
    }

    #[test]
    fn stops_promptly_while_producer_is_blocked() -> Result<(), Box<dyn std::error::Error>> {
        let (item_tx, item_rx) = item_channel(1);
        let (signal, listener) = shutdown_channel(1);
        let (controller, queue) = update_queue();

        // Producer keeps the channel full; the UI never drains the queue
        let producer = std::thread::spawn(move || {
            let mut sent = 0usize;
            while item_tx.send(item(&format!("f{sent}"))).is_ok() {
                sent += 1;
            }
            sent
        });

        let handle = IngestLoop::new(item_rx, listener, controller).spawn();
        std::thread::sleep(Duration::from_millis(20));

        let started = Instant::now();
        signal.trigger();
        let report = handle.join().map_err(|_| "ingest thread panicked")?;
        assert!(started.elapsed() < Duration::from_secs(1));

        let sent = producer.join().map_err(|_| "producer panicked")?;
        assert!(sent >= report.delivered);
        assert_eq!(queue.len(), report.delivered);
        Ok(())
    }

    #[test]
    fn double_shutdown_is_harmless() -> Result<(), Box<dyn std::error::Error>> {
        let (_item_tx, item_rx) = item_channel(4);
        let (signal, listener) = shutdown_channel(10);
        let (controller, _queue) = update_queue();

        let handle = IngestLoop::new(item_rx, listener, controller).spawn();
        signal.trigger();
        signal.trigger();

        let report = handle.join().map_err(|_| "ingest thread panicked")?;
        assert_eq!(report.delivered, 0);

        // Extra tokens after the loop is gone are dropped without error
        signal.trigger();
        Ok(())
    }

    #[test]
    fn finished_scan_keeps_loop_alive_until_shutdown() -> Result<(), Box<dyn std::error::Error>> {
        let (item_tx, item_rx) = item_channel(4);
        let (signal, listener) = shutdown_channel(1);
        let (controller, queue) = update_queue();

        item_tx.send(item("only"))?;
        drop(item_tx);

        let handle = IngestLoop::new(item_rx, listener, controller).spawn();
        let deadline = Instant::now() + Duration::from_secs(2);
        while queue.is_empty() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!handle.is_finished());

        signal.trigger();
        let report = handle.join().map_err(|_| "ingest thread panicked")?;
        assert_eq!(report.delivered, 1);
        Ok(())
    }

    #[test]
    fn closed_update_queue_stops_loop() -> Result<(), Box<dyn std::error::Error>> {
        let (item_tx, item_rx) = item_channel(4);
        let (_signal, listener) = shutdown_channel(1);
        let (controller, queue) = update_queue();
        drop(queue);

        item_tx.send(item("orphan"))?;
        let report = IngestLoop::new(item_rx, listener, controller).run();
        assert_eq!(report.delivered, 0);
        Ok(())
    }

    #[test]
    fn stop_moves_to_stopped_and_releases_items() -> Result<(), Box<dyn std::error::Error>> {
        let (item_tx, item_rx) = item_channel(4);
        let (signal, listener) = shutdown_channel(1);
        let (controller, _queue) = update_queue();

        let mut ingest = IngestLoop::new(item_rx, listener, controller);
        assert_eq!(ingest.state, IngestState::Running);

        item_tx.send(item("first"))?;
        ingest.step();
        assert_eq!(ingest.state, IngestState::Running);
        assert_eq!(ingest.delivered, 1);

        signal.trigger();
        ingest.step();
        assert_eq!(ingest.state, IngestState::Stopped);
        assert!(ingest.items.is_none());
        assert!(item_tx.send(item("late")).is_err());
        Ok(())
    }
}
