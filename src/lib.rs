//! Streaming SHA-256 over bounds-checked byte spans
//!
//! This crate computes SHA-256 digests (FIPS 180-4) of byte sequences that
//! arrive incrementally, in chunks of any size, and ships a small tool that
//! hashes every file in a directory tree.
//!
//! The focus is on **clarity, predictability, and auditability**. The hash
//! engine is a plain state machine over fixed-size buffers: it performs no
//! I/O, allocates nothing, accepts every byte value, and produces the same
//! digest however the input is split across calls.
//!
//! # Module overview
//!
//! - `primitives`
//!   Bounds-safe building blocks: `Span` ranges with clamping, zero-copy
//!   `ByteSpan` views, clamped `Cursor`s, the fixed-capacity
//!   `BoundedBuffer`, byte-order aware integer packing (`Endian`,
//!   `ByteOrderScalar`) and the `Digest` value type. Every index they hand
//!   out stays inside the range it was derived from.
//!
//! - `hash`
//!   The streaming `Sha256` engine and the one-shot `sha256` function.
//!
//! - `files`
//!   Collaborators that source bytes for the engine: reading files and
//!   `Read` implementations, walking directory trees, rendering report rows.
//!   All I/O and all caller-visible errors live here.
//!
//! - `config`
//!   Settings for the file collaborators.
//!
//! # Example
//!
//! ```
//! use sha256files::hash::{Sha256, sha256};
//!
//! let mut engine = Sha256::new();
//! engine.update(b"ab").add_byte(b'c');
//!
//! assert_eq!(*engine.hash(), sha256(b"abc"));
//! assert_eq!(
//!     engine.hash().to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod hash;
pub mod primitives;

pub use config::ScanConfig;
pub use error::{Error, Result};
