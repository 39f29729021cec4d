//! Terminal UI of lister.
//!
//! - [render]: the per-frame entry point and the screen layout.
//! - [panes]: drawing of the list pane and the text panes.

pub mod panes;
pub mod render;

pub use render::{layout_chunks, render};
