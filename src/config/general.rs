//! The general configuration settings for lister.
//!
//! This module defines the [General] struct for deserializing the `[general]` table of
//! lister.toml and the [InternalGeneral] struct with validated values used at runtime.

use crate::core::pipeline::{DEFAULT_ITEM_BUFFER, DEFAULT_SHUTDOWN_BUFFER};
use crate::utils::{clamp_buffer, expand_home_path};

use serde::Deserialize;

use std::path::PathBuf;

/// Largest accepted item channel capacity.
pub const MAX_ITEM_BUFFER: usize = 100_000;
/// Largest accepted shutdown signal capacity.
pub const MAX_SHUTDOWN_BUFFER: usize = 64;
/// Log file used when none is configured, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs.txt";
/// Log filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "lister_tui=debug,lister=debug,warn";

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    log_file: String,
    log_filter: String,
    item_buffer: usize,
    shutdown_buffer: usize,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_file: DEFAULT_LOG_FILE.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
            item_buffer: DEFAULT_ITEM_BUFFER,
            shutdown_buffer: DEFAULT_SHUTDOWN_BUFFER,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    log_file: PathBuf,
    log_filter: String,
    item_buffer: usize,
    shutdown_buffer: usize,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let log_file = if g.log_file.trim().is_empty() {
            PathBuf::from(DEFAULT_LOG_FILE)
        } else {
            expand_home_path(g.log_file.trim())
        };
        let log_filter = if g.log_filter.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            g.log_filter
        };

        Self {
            log_file,
            log_filter,
            item_buffer: clamp_buffer("item_buffer", g.item_buffer, MAX_ITEM_BUFFER),
            shutdown_buffer: clamp_buffer("shutdown_buffer", g.shutdown_buffer, MAX_SHUTDOWN_BUFFER),
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn log_file(&self) -> &PathBuf {
        &self.log_file
    }

    #[inline]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    #[inline]
    pub fn item_buffer(&self) -> usize {
        self.item_buffer
    }

    #[inline]
    pub fn shutdown_buffer(&self) -> usize {
        self.shutdown_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_buffers_are_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let raw: General = toml::from_str(
            r#"
            item_buffer = 0
            shutdown_buffer = 5000
            "#,
        )?;
        let general = InternalGeneral::from(raw);
        assert_eq!(general.item_buffer(), 1);
        assert_eq!(general.shutdown_buffer(), MAX_SHUTDOWN_BUFFER);
        assert_eq!(general.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
        Ok(())
    }

    #[test]
    fn blank_values_fall_back() {
        let raw = General {
            log_file: "   ".into(),
            log_filter: String::new(),
            ..General::default()
        };
        let general = InternalGeneral::from(raw);
        assert_eq!(general.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(general.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(general.item_buffer(), DEFAULT_ITEM_BUFFER);
    }
}
