//! Depth-first directory tree traversal that hashes every regular file.
//!
//! Symlinks are reported but never followed. Children of a directory are
//! visited in name order so reports are reproducible across runs. A single
//! engine is reused for every file in the tree.

use std::ffi::OsString;
use std::fs::{self, FileType, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::reader::digest_file;
use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::hash::Sha256;
use crate::primitives::Digest;

/// What kind of filesystem object an [`Entry`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Fifo,
    Symlink,
    CharDevice,
    Directory,
    BlockDevice,
    File,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Fixed-width (4 character) report label.
    pub const fn label(self) -> &'static str {
        match self {
            EntryKind::Fifo => "FIFO",
            EntryKind::Symlink => "LNK ",
            EntryKind::CharDevice => "CHR ",
            EntryKind::Directory => "DIR ",
            EntryKind::BlockDevice => "BLK ",
            EntryKind::File => "FILE",
            EntryKind::Socket => "SOCK",
            EntryKind::Unknown => "??? ",
        }
    }

    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            Self::special(file_type)
        }
    }

    #[cfg(unix)]
    fn special(file_type: FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_fifo() {
            EntryKind::Fifo
        } else if file_type.is_char_device() {
            EntryKind::CharDevice
        } else if file_type.is_block_device() {
            EntryKind::BlockDevice
        } else if file_type.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Unknown
        }
    }

    #[cfg(not(unix))]
    fn special(_file_type: FileType) -> Self {
        EntryKind::Unknown
    }
}

/// Result of processing one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Regular file read to the end.
    Hashed { size: u64, digest: Digest },
    /// The entry could not be inspected or read; `code` is the OS error
    /// number, or -1 when there is none.
    Failed { code: i32 },
    /// Not a regular file, so nothing was hashed.
    Skipped,
}

/// One visited filesystem object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Containing directory (the root itself for the root entry).
    pub parent: PathBuf,
    /// File name as the platform returned it; empty for the root entry.
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Permission bits, where the platform has them.
    pub mode: Option<u32>,
    pub outcome: Outcome,
}

/// Totals gathered over one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub files: u64,
    pub directories: u64,
    pub others: u64,
    pub failures: u64,
    pub bytes: u64,
}

impl WalkSummary {
    fn record(&mut self, entry: &Entry) {
        match entry.kind {
            EntryKind::File => self.files += 1,
            EntryKind::Directory => self.directories += 1,
            _ => self.others += 1,
        }

        match entry.outcome {
            Outcome::Hashed { size, .. } => self.bytes += size,
            Outcome::Failed { .. } => self.failures += 1,
            Outcome::Skipped => {}
        }
    }
}

pub struct TreeWalker {
    config: ScanConfig,
    engine: Sha256,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            engine: Sha256::new(),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Visits `root` and everything beneath it, calling `visit` once per
    /// entry in depth-first pre-order.
    ///
    /// Unreadable files and directories do not stop the walk; they show up
    /// as [`Outcome::Failed`] entries or are logged. An error returned by
    /// `visit` aborts the walk as [`Error::Output`].
    pub fn walk<F>(&mut self, root: &Path, mut visit: F) -> Result<WalkSummary>
    where
        F: FnMut(&Entry) -> io::Result<()>,
    {
        self.config.validate()?;

        let mut summary = WalkSummary::default();
        self.visit_path(
            root,
            root.to_path_buf(),
            OsString::new(),
            &mut visit,
            &mut summary,
        )?;

        info!(
            root = %root.display(),
            files = summary.files,
            directories = summary.directories,
            failures = summary.failures,
            bytes = summary.bytes,
            "walk complete"
        );

        Ok(summary)
    }

    fn visit_path<F>(
        &mut self,
        path: &Path,
        parent: PathBuf,
        name: OsString,
        visit: &mut F,
        summary: &mut WalkSummary,
    ) -> Result<()>
    where
        F: FnMut(&Entry) -> io::Result<()>,
    {
        let entry = self.inspect(path, parent, name);
        debug!(path = %path.display(), kind = entry.kind.label(), "visiting");

        summary.record(&entry);
        visit(&entry).map_err(Error::Output)?;

        if entry.kind != EntryKind::Directory {
            return Ok(());
        }

        let listing = match fs::read_dir(path) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot list directory");
                return Ok(());
            }
        };

        let mut names = Vec::new();
        for child in listing {
            match child {
                Ok(child) => names.push(child.file_name()),
                Err(e) => warn!(path = %path.display(), error = %e, "cannot read directory entry"),
            }
        }
        names.sort();

        for name in names {
            let child = path.join(&name);
            self.visit_path(&child, path.to_path_buf(), name, visit, summary)?;
        }

        Ok(())
    }

    fn inspect(&mut self, path: &Path, parent: PathBuf, name: OsString) -> Entry {
        let (kind, mode, outcome) = match fs::symlink_metadata(path) {
            Ok(metadata) => {
                let kind = EntryKind::from_file_type(metadata.file_type());
                let outcome = match kind {
                    EntryKind::File => self.hash_file(path),
                    _ => Outcome::Skipped,
                };

                (kind, permission_bits(&metadata), outcome)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot stat entry");
                let code = e.raw_os_error().unwrap_or(-1);

                (EntryKind::File, None, Outcome::Failed { code })
            }
        };

        Entry {
            parent,
            name,
            path: path.to_path_buf(),
            kind,
            mode,
            outcome,
        }
    }

    fn hash_file(&mut self, path: &Path) -> Outcome {
        match digest_file(&mut self.engine, path, &self.config) {
            Ok((digest, size)) => Outcome::Hashed { size, digest },
            Err(e) => {
                warn!(error = %e, "cannot hash file");

                Outcome::Failed {
                    code: e.raw_os_error().unwrap_or(-1),
                }
            }
        }
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    Some(metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &Metadata) -> Option<u32> {
    None
}
