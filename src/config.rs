//! Configuration for tree hashing.
//!
//! The hash engine has nothing to configure; these settings only govern how
//! the file collaborators feed it.

use crate::error::{Error, Result};

/// Default number of bytes requested per read (64 KiB).
pub const DEFAULT_READ_CHUNK: usize = 64 * 1024;

/// Settings for [`crate::files::TreeWalker`] and the file readers.
///
/// # Example
///
/// ```
/// use sha256files::ScanConfig;
///
/// let config = ScanConfig::default().with_read_chunk(4096);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Bytes requested from the source per read call.
    read_chunk: usize,
}

impl ScanConfig {
    /// Creates a configuration with an explicit read chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `read_chunk` is zero.
    pub fn new(read_chunk: usize) -> Result<Self> {
        let config = Self { read_chunk };
        config.validate()?;

        Ok(config)
    }

    pub fn with_read_chunk(mut self, read_chunk: usize) -> Self {
        self.read_chunk = read_chunk;
        self
    }

    pub fn read_chunk(&self) -> usize {
        self.read_chunk
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_chunk == 0 {
            return Err(Error::InvalidConfig {
                message: "read chunk size must be non-zero",
            });
        }

        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            read_chunk: DEFAULT_READ_CHUNK,
        }
    }
}
