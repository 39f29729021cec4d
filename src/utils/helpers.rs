//! Helpers for lister.
//!
//! Small utilities shared by the config loader, the CLI and the UI:
//! - Locating the home directory and expanding `~` in configured paths
//! - Displaying home directories as "~" in pane titles
//! - Clamping configured channel capacities to safe values

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Smallest capacity accepted for any channel buffer.
pub const MIN_BUFFER: usize = 1;

/// Returns the user's home directory, if it can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory. Other paths are returned unchanged.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = get_home() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Util function to shorten home directory to ~.
/// Used for the list pane title.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

/// Safely clamp a configured channel capacity into `MIN_BUFFER..=max`.
///
/// Runs while the config is loaded, before logging exists, so warnings go to stderr.
pub fn clamp_buffer(name: &str, value: usize, max: usize) -> usize {
    let clamped = value.clamp(MIN_BUFFER, max);
    if clamped != value {
        eprintln!(
            "[Warning] {}={} out of range ({}..={}), clamped to {}",
            name, value, MIN_BUFFER, max, clamped
        );
    }
    clamped
}
