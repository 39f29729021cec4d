//! The main config loading module for lister.
//!
//! Handles loading and deserializing settings from `lister.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//!
//! Also implements default config generation for `lister --init`.

use crate::config::{Display, General, InternalGeneral, Keys};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    keys: Keys,
}

/// Main configuration struct for lister
/// This struct holds the processed configuration options.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    keys: Keys,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Runs before logging is set up, so problems are reported on stderr.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                eprintln!("Error parsing config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                eprintln!("Error reading config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Parses a config from toml text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the LISTER_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/lister/lister.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LISTER_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lister/lister.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lister/lister.toml");
        }
        PathBuf::from("lister.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &PathBuf) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

const DEFAULT_TOML: &str = r##"# lister.toml - default configuration for lister
# Commented values are the internal defaults.

[general]
# Diagnostics are appended here. Relative paths are resolved against the working directory.
# log_file = "logs.txt"
# Overridden by RUST_LOG when set.
# log_filter = "lister_tui=debug,lister=debug,warn"
# Items buffered between the scanner and the UI before the scanner waits.
# item_buffer = 100
# shutdown_buffer = 10

[display]
# list_width = 30
# borders = true
# border_shape = "square"   # "square", "rounded", "double" or "thick"
# mouse = true
# selection_icon = ""

[keys]
# go_up = ["k", "Up"]
# go_down = ["j", "Down"]
# go_to_top = ["Home"]
# go_to_bottom = ["End", "G"]
# quit = ["q"]
# interrupt = ["Ctrl+c"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_default_parses() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/lister.toml");
        Config::generate_default(&path)?;

        let content = fs::read_to_string(&path)?;
        let config = Config::from_toml(&content)?;
        assert_eq!(config.general().item_buffer(), 100);
        assert_eq!(config.display().list_width(), 30);

        let again = Config::generate_default(&path);
        assert!(matches!(again, Err(e) if e.kind() == io::ErrorKind::AlreadyExists));
        Ok(())
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[general\nitem_buffer = ").is_err());
    }
}
