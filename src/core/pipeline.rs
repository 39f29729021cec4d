//! The conduits connecting the scanner, the ingestion loop and the UI.
//!
//! - The item channel is bounded. The scanner blocks on a full channel until the ingestion
//!   loop catches up, and its sends fail once the ingestion loop has stopped.
//! - The shutdown signal is a small bounded channel. Triggering it never blocks: a full or
//!   closed channel means a shutdown is already underway.

use crate::core::item::Item;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use tracing::debug;

/// Default capacity of the item channel.
pub const DEFAULT_ITEM_BUFFER: usize = 100;
/// Default capacity of the shutdown signal.
pub const DEFAULT_SHUTDOWN_BUFFER: usize = 10;

pub type ItemSender = Sender<Item>;
pub type ItemReceiver = Receiver<Item>;

/// Creates the bounded item channel. A capacity of zero is raised to one.
pub fn item_channel(capacity: usize) -> (ItemSender, ItemReceiver) {
    bounded(capacity.max(1))
}

/// Sending half of the shutdown conduit, held by the UI.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    tx: Sender<()>,
}

/// Receiving half of the shutdown conduit, owned by the ingestion loop.
#[derive(Debug)]
pub struct ShutdownListener {
    rx: Receiver<()>,
}

/// Creates the shutdown conduit. A capacity of zero is raised to one.
pub fn shutdown_channel(capacity: usize) -> (ShutdownSignal, ShutdownListener) {
    let (tx, rx) = bounded(capacity.max(1));
    (ShutdownSignal { tx }, ShutdownListener { rx })
}

impl ShutdownSignal {
    /// Enqueues a shutdown token without blocking.
    ///
    /// Returns `true` if the token was queued. Extra tokens beyond the channel capacity, or
    /// tokens sent after the ingestion loop is gone, are dropped.
    pub fn trigger(&self) -> bool {
        match self.tx.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) => {
                debug!("Shutdown signal already full, token dropped");
                false
            }
            Err(TrySendError::Disconnected(())) => {
                debug!("Shutdown listener gone, token dropped");
                false
            }
        }
    }
}

impl ShutdownListener {
    /// Non-blocking check for a pending shutdown.
    ///
    /// A listener whose signals have all been dropped also reports a shutdown, since nobody is
    /// left to ask for one.
    pub fn is_pending(&self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(e) => e.is_disconnected(),
        }
    }

    #[inline]
    pub(crate) fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_never_blocks_when_full() {
        let (signal, listener) = shutdown_channel(2);
        assert!(signal.trigger());
        assert!(signal.trigger());
        assert!(!signal.trigger());
        assert!(listener.is_pending());
    }

    #[test]
    fn dropped_signal_counts_as_shutdown() {
        let (signal, listener) = shutdown_channel(1);
        assert!(!listener.is_pending());
        drop(signal);
        assert!(listener.is_pending());
    }

    #[test]
    fn trigger_after_listener_dropped() {
        let (signal, listener) = shutdown_channel(1);
        drop(listener);
        assert!(!signal.trigger());
    }

    #[test]
    fn zero_capacity_is_raised() {
        let (tx, _rx) = item_channel(0);
        assert_eq!(tx.capacity(), Some(1));
    }
}
