//! Application layer of lister.
//!
//! - [state]: the UI-thread owned [AppState] (items, selection and widget texts).
//! - [keymap]: key to [keymap::Action] mapping built from the config.
//! - [controller]: the serialized update queue, the only way other threads mutate the UI.
//! - [ingest]: the ingestion loop moving items from the scanner to the update queue.
//! - [lifecycle]: the [Application] orchestrator and its running [Session].

pub mod controller;
pub mod ingest;
pub mod keymap;
pub mod lifecycle;
pub mod state;

pub use controller::{QueueClosed, UiController, UiUpdate, UpdateQueue, update_queue};
pub use ingest::{IngestLoop, IngestReport};
pub use lifecycle::{Application, Session};
pub use state::{AppState, KeypressResult};
