//! Miscellaneous utility functions for lister.
//!
//! - [cli]: command-line argument handling.
//! - [helpers]: home directory helpers and config value clamping.
//! - [logging]: log file and tracing subscriber setup.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{clamp_buffer, expand_home_path, get_home, shorten_home_path};
