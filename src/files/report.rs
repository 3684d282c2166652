//! Pipe-separated text rows for walked entries.
//!
//! Row layout:
//!
//! ```text
//! KIND|MODE|        SIZE|<64 hex digest or blanks>|parent/|name
//! ```
//!
//! Unreadable files carry `#NNNNN error` in the size column. Path columns
//! are written as the raw bytes the platform handed out, so names that are
//! not valid UTF-8 come out unchanged.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{self, Path, PathBuf};

use super::walk::{Entry, Outcome};
use crate::primitives::DIGEST_LEN;

/// Marker printed after the last row of a report.
pub const DONE_MARKER: &str = "*DONE*";

const SIZE_WIDTH: usize = 12;
const HASH_WIDTH: usize = DIGEST_LEN * 2;

/// Everything up to and including the `|` before the parent column.
fn leading_columns(entry: &Entry) -> String {
    let mode = match entry.mode {
        Some(mode) => format!("{:04o}", mode),
        None => "    ".to_owned(),
    };

    let blank = " ".repeat(HASH_WIDTH);
    let body = match &entry.outcome {
        Outcome::Hashed { size: 0, .. } => format!("{:>SIZE_WIDTH$}|{blank}", 0),
        Outcome::Hashed { size, digest } => format!("{:>SIZE_WIDTH$}|{}", size, digest),
        Outcome::Failed { code } => format!("#{:05} error|{blank}", code),
        Outcome::Skipped => format!("{:>SIZE_WIDTH$}|{blank}", 0),
    };

    format!("{}|{}|{}|", entry.kind.label(), mode, body)
}

/// Writes one entry as a report row followed by a newline.
///
/// Parent and name are copied byte for byte.
pub fn write_row<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    out.write_all(leading_columns(entry).as_bytes())?;
    out.write_all(entry.parent.as_os_str().as_encoded_bytes())?;
    out.write_all(b"/|")?;
    out.write_all(entry.name.as_encoded_bytes())?;
    out.write_all(b"\n")
}

/// Formats one entry as a row without a trailing newline.
///
/// Path bytes that are not valid UTF-8 are replaced with U+FFFD; use
/// [`write_row`] for the exact bytes.
pub fn format_row(entry: &Entry) -> String {
    format!(
        "{}{}/|{}",
        leading_columns(entry),
        entry.parent.display(),
        entry.name.to_string_lossy()
    )
}

/// Drops one trailing path separator from roots longer than two bytes, so
/// `dir/` and `dir` report identically while `/` and `./` are kept as given.
pub fn normalize_root(root: &Path) -> PathBuf {
    let raw = root.as_os_str().as_encoded_bytes();

    match raw.split_last() {
        Some((&last, rest))
            if raw.len() > 2 && (last == b'/' || last == path::MAIN_SEPARATOR as u8) =>
        {
            // SAFETY: `rest` ends right before an ASCII separator byte, which
            // is a valid split point of an OS string.
            PathBuf::from(unsafe { OsStr::from_encoded_bytes_unchecked(rest) })
        }
        _ => root.to_path_buf(),
    }
}
