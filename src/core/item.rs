//! The UI-facing value built from one directory entry.

use crate::core::classify::FileFormat;
use crate::core::fm::EntryStat;
use crate::core::formatter::format_file_time;

use std::ffi::OsStr;
use std::path::Path;

/// One entry of the list, ready for display.
///
/// Items are immutable. The only way to build one is [Item::from_entry], which fills every
/// field at once, so a half-built item can never be published to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    description: String,
    footer: String,
}

impl Item {
    /// Builds the item for entry `name` inside `parent`.
    ///
    /// The footer is the full path, `parent` and `name` joined with a `/`.
    pub fn from_entry(parent: &Path, name: &OsStr, stat: &EntryStat, format: FileFormat) -> Self {
        let title = name.to_string_lossy().into_owned();
        let parent = parent.display().to_string();

        let description = format!(
            "File size: {}\nParent dir: {}\nFile mode: {}\nDirectory: {}\nFile format: {}\nModified: {}",
            stat.size(),
            parent,
            stat.mode(),
            if stat.is_dir() { "Yes" } else { "No" },
            format,
            format_file_time(stat.modified()),
        );
        let footer = format!("{}/{}", parent, title);

        Item {
            title,
            description,
            footer,
        }
    }

    // Accessors

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn footer(&self) -> &str {
        &self.footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn item_fields_are_filled() {
        let stat = EntryStat::new(10, "-rw-r--r--", false);
        let item = Item::from_entry(
            &PathBuf::from("/tmp/demo"),
            &OsString::from("a.txt"),
            &stat,
            FileFormat::Text,
        );

        assert_eq!(item.title(), "a.txt");
        assert_eq!(item.footer(), "/tmp/demo/a.txt");

        let lines: Vec<&str> = item.description().lines().collect();
        assert_eq!(
            lines,
            vec![
                "File size: 10",
                "Parent dir: /tmp/demo",
                "File mode: -rw-r--r--",
                "Directory: No",
                "File format: Text",
                "Modified: -",
            ]
        );
    }

    #[test]
    fn directory_item() {
        let stat = EntryStat::new(4096, "drwxr-xr-x", true);
        let item = Item::from_entry(
            &PathBuf::from("."),
            &OsString::from("b"),
            &stat,
            FileFormat::Bin,
        );
        assert!(item.description().contains("Directory: Yes"));
        assert!(item.description().contains("File format: Bin"));
        assert_eq!(item.footer(), "./b");
    }
}
