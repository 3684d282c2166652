//! Error types for sha256files.
//!
//! The hash engine itself cannot fail. These errors come from the code that
//! sources bytes for it (files, directory listings) or writes its report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the tree hashing collaborators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),

    #[error("invalid digest hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid config: {message}")]
    InvalidConfig { message: &'static str },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// OS error code behind an I/O failure, if there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Io { source, .. } | Error::Output(source) => source.raw_os_error(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
