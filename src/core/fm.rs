//! Filesystem access for lister.
//!
//! The scanner never touches `std::fs` directly. It goes through the [FileSystem] trait so
//! listing failures, per-entry stat failures and classification can be swapped out in tests.
//! [LocalFs] is the implementation used by the binary.

use crate::core::classify::is_text_file;
use crate::core::formatter::format_mode;

use tracing::warn;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Stat result for a single directory entry.
///
/// Symlinks are followed, so a link to a directory reports `is_dir == true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStat {
    size: u64,
    mode: String,
    is_dir: bool,
    modified: Option<SystemTime>,
}

impl EntryStat {
    pub fn new(size: u64, mode: impl Into<String>, is_dir: bool) -> Self {
        EntryStat {
            size,
            mode: mode.into(),
            is_dir,
            modified: None,
        }
    }

    pub fn with_modified(mut self, modified: Option<SystemTime>) -> Self {
        self.modified = modified;
        self
    }

    // Accessors

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// The filesystem operations the scanner depends on.
///
/// `list` failing is a failure of the whole directory. `stat` failing only concerns the one
/// entry that was asked about.
pub trait FileSystem {
    /// Returns the names of all entries directly inside `path`.
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Stats a single entry, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<EntryStat>;

    /// Best-effort guess whether `path` is a text file.
    fn is_text(&self, path: &Path) -> bool;
}

/// [FileSystem] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    /// Entries are returned sorted by file name so the listing order is stable across runs.
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::with_capacity(64);

        for entry in fs::read_dir(path)? {
            match entry {
                Ok(e) => names.push(e.file_name()),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable directory entry");
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn stat(&self, path: &Path) -> io::Result<EntryStat> {
        let metadata = fs::metadata(path)?;
        Ok(
            EntryStat::new(metadata.len(), format_mode(&metadata), metadata.is_dir())
                .with_modified(metadata.modified().ok()),
        )
    }

    fn is_text(&self, path: &Path) -> bool {
        is_text_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn list_returns_sorted_names() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("zeta.txt"))?;
        File::create(tmp.path().join("alpha.txt"))?;
        fs::create_dir(tmp.path().join("middle"))?;

        let names: Vec<String> = LocalFs
            .list(tmp.path())?
            .into_iter()
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha.txt", "middle", "zeta.txt"]);
        Ok(())
    }

    #[test]
    fn stat_regular_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file_path = tmp.path().join("hello.txt");
        let mut file = File::create(&file_path)?;
        write!(file, "abc123")?;

        let stat = LocalFs.stat(&file_path)?;
        assert_eq!(stat.size(), 6);
        assert!(!stat.is_dir());
        assert!(stat.mode().starts_with('-'));
        assert!(stat.modified().is_some());
        Ok(())
    }

    #[test]
    fn stat_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let dir_path = tmp.path().join("emptydir");
        fs::create_dir(&dir_path)?;

        let stat = LocalFs.stat(&dir_path)?;
        assert!(stat.is_dir());
        assert!(stat.mode().starts_with('d'));
        Ok(())
    }

    #[test]
    fn list_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        assert!(LocalFs.list(&path).is_err());
    }
}
