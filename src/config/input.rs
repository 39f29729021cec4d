//! Input configuration options for lister
//!
//! This module defines the `[keys]` table of the lister.toml configuration file.
//! Every action accepts a list of key strings, see [crate::app::keymap] for the syntax.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    quit: Vec<String>,
    interrupt: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(go_up, go_down, go_to_top, go_to_bottom, quit, interrupt);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_to_top: vec!["Home".into()],
            go_to_bottom: vec!["End".into(), "G".into()],

            quit: vec!["q".into()],
            interrupt: vec!["Ctrl+c".into()],
        }
    }
}
