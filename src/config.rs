//! Configuration module for lister.
//!
//! Handles loading and deserializing `lister.toml`:
//! - [load]: the [Config] struct, file discovery and default file generation.
//! - [general]: log file, log filter and channel buffer sizes.
//! - [display]: list pane width, borders and mouse support.
//! - [input]: key bindings.

pub mod display;
pub mod general;
pub mod input;
pub mod load;

pub use display::{BorderShape, Display};
pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::{Config, RawConfig};
