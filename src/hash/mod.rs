//! Hash algorithms exposed by the crate.
//!
//! Currently includes a streaming SHA-256 with a pure-Rust implementation.

pub mod sha256;

/// Re-export of the SHA-256 engine and convenience function.
pub use sha256::core::{Sha256, State, sha256};
