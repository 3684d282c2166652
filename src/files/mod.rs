//! File and directory-tree collaborators.
//!
//! Everything that touches the filesystem lives here, outside the hash
//! engine. These modules open and read files, walk directory trees and
//! render report rows; the engine only ever sees the byte chunks they hand
//! it.
//!
//! - [`reader`]: stream a `Read` source or a file into an engine
//! - [`walk`]: depth-first traversal hashing every regular file
//! - [`report`]: text rows for walked entries

pub mod reader;
pub mod report;
pub mod walk;

pub use reader::{digest_file, digest_reader};
pub use report::{DONE_MARKER, format_row, normalize_root, write_row};
pub use walk::{Entry, EntryKind, Outcome, TreeWalker, WalkSummary};
