//! Display configuration options for lister
//!
//! This module defines the `[display]` table of the lister.toml configuration file.

use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Narrowest list pane that still shows a few characters of each title.
const MIN_LIST_WIDTH: u16 = 8;

/// Display configuration options
///
/// Default values are provided for all options so a partial `[display]` table works.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    list_width: u16,
    borders: bool,
    border_shape: BorderShape,
    mouse: bool,
    selection_icon: String,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn list_width(&self) -> u16 {
        self.list_width.max(MIN_LIST_WIDTH)
    }

    pub fn borders(&self) -> bool {
        self.borders
    }

    pub fn border_shape(&self) -> &BorderShape {
        &self.border_shape
    }

    pub fn mouse(&self) -> bool {
        self.mouse
    }

    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            list_width: 30,
            borders: true,
            border_shape: BorderShape::Square,
            mouse: true,
            selection_icon: String::new(),
        }
    }
}

/// Border shape options
/// This enum defines the different border shapes that can be used in the UI
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    Square,
    Rounded,
    Double,
    Thick,
}

/// Public methods for accessing border shape options
impl BorderShape {
    pub fn as_border_type(&self) -> BorderType {
        match self {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let display: Display = toml::from_str(
            r#"
            border_shape = "rounded"
            list_width = 2
            "#,
        )?;
        assert_eq!(display.border_shape(), &BorderShape::Rounded);
        assert_eq!(display.list_width(), MIN_LIST_WIDTH);
        assert!(display.borders());
        assert!(display.mouse());
        Ok(())
    }
}
