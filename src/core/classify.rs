//! Text/binary classification of files.
//!
//! Classification is presentation data only. Anything that cannot be opened or read is
//! reported as [FileFormat::Bin].

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Bytes sniffed from the start of a file
const SNIFF_BYTES: usize = 1024;
// Longest UTF-8 sequence, chars starting this close to the end are not checked
const UTF8_MAX: usize = 4;

/// Text or binary, as shown in the item description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    Text,
    #[default]
    Bin,
}

impl FileFormat {
    pub fn from_is_text(is_text: bool) -> Self {
        if is_text {
            FileFormat::Text
        } else {
            FileFormat::Bin
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Text => f.write_str("Text"),
            FileFormat::Bin => f.write_str("Bin"),
        }
    }
}

/// Known extensions. `Some(true)` for text types. Stylesheets, scripts and svg are reported
/// as binary so they are never treated as plain prose.
fn classify_extension(ext: &str) -> Option<bool> {
    match ext.to_ascii_lowercase().as_str() {
        "css" | "js" | "svg" => Some(false),
        "txt" | "text" | "md" | "markdown" | "csv" | "tsv" | "htm" | "html" | "xml" | "ics"
        | "vcf" => Some(true),
        _ => None,
    }
}

/// Control characters and the replacement character mark binary content.
fn is_binary_char(c: char) -> bool {
    c == char::REPLACEMENT_CHARACTER || (c < ' ' && !matches!(c, '\n' | '\t' | '\x0c'))
}

/// Reports whether `buf` looks like text.
///
/// Only the first [SNIFF_BYTES] bytes are considered. Invalid UTF-8, U+FFFD and control
/// characters other than `\n`, `\t` and form feed make it binary. Characters starting within
/// the last few bytes are not checked, since they may have been cut off.
pub fn is_text(buf: &[u8]) -> bool {
    let buf = &buf[..buf.len().min(SNIFF_BYTES)];
    let mut offset = 0;

    for chunk in buf.utf8_chunks() {
        for c in chunk.valid().chars() {
            if offset + UTF8_MAX > buf.len() {
                return true;
            }
            if is_binary_char(c) {
                return false;
            }
            offset += c.len_utf8();
        }
        if !chunk.invalid().is_empty() {
            return offset + UTF8_MAX > buf.len();
        }
    }
    true
}

/// Reports whether the file at `path` is a text file.
///
/// Directories and empty or unreadable files are never text. A known extension decides
/// without reading the file, everything else is decided by sniffing its content.
pub fn is_text_file(path: &Path) -> bool {
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };
    if meta.is_dir() {
        return false;
    }

    if let Some(known) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(classify_extension)
    {
        return known;
    }

    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut buf = [0u8; SNIFF_BYTES];
    match file.read(&mut buf) {
        Ok(0) | Err(_) => false,
        Ok(n) => is_text(&buf[..n]),
    }
}
