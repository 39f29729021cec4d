//! The UI's serialized update queue.
//!
//! Threads other than the UI thread never touch [AppState] directly. They hold a
//! [UiController] and enqueue [UiUpdate] messages; the UI event loop drains the
//! [UpdateQueue] on its own thread, one update at a time and in enqueue order, and redraws.

use crate::app::state::AppState;
use crate::core::Item;

use crossbeam_channel::{Receiver, Sender, unbounded};
use thiserror::Error;

/// A mutation of the UI state requested from another thread.
#[derive(Debug)]
pub enum UiUpdate {
    /// Append the item to the list and refresh the footer.
    AppendItem(Item),
}

/// The UI side has gone away and no longer applies updates.
#[derive(Debug, Error)]
#[error("UI update queue is closed")]
pub struct QueueClosed;

/// Creates a connected controller/queue pair.
pub fn update_queue() -> (UiController, UpdateQueue) {
    let (tx, rx) = unbounded();
    (UiController { tx }, UpdateQueue { rx })
}

/// Handle used by background threads to submit UI mutations.
#[derive(Debug, Clone)]
pub struct UiController {
    tx: Sender<UiUpdate>,
}

impl UiController {
    /// Enqueues an append of `item` followed by a redraw.
    ///
    /// Never blocks. The append happens later, on the UI thread.
    pub fn append(&self, item: Item) -> Result<(), QueueClosed> {
        self.tx
            .send(UiUpdate::AppendItem(item))
            .map_err(|_| QueueClosed)
    }
}

/// The UI thread's end of the update queue.
#[derive(Debug)]
pub struct UpdateQueue {
    rx: Receiver<UiUpdate>,
}

impl UpdateQueue {
    /// Applies every pending update to `state` in order.
    ///
    /// Returns true if anything was applied and the frame needs a redraw.
    pub fn apply_pending(&self, state: &mut AppState) -> bool {
        let mut changed = false;
        while let Ok(update) = self.rx.try_recv() {
            state.apply(update);
            changed = true;
        }
        changed
    }

    /// Number of updates waiting to be applied.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
