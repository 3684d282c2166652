//! Primitive types
//!
//! This module defines the low-level building blocks the hash engine is
//! written against.
//!
//! Primitives are small, fixed-size and allocation-free. Every index they
//! hand out is clamped to an explicit range, so code built on them cannot
//! read or write outside the memory it was given:
//! - `Span`: an ordered `[begin, end)` index range with clamping
//! - `ByteSpan`: a zero-copy read-only byte view
//! - `Cursor`: a clamped position within a `Span`
//! - `BoundedBuffer`: a fixed-capacity buffer with a tracked fill length
//! - `Endian` / `ByteOrderScalar`: integer packing in a chosen byte order
//! - `Digest`: the 32-byte SHA-256 output value

mod bounded;
mod conv;
mod cursor;
mod digest;
mod span;

pub use bounded::BoundedBuffer;
pub use conv::{ByteOrderScalar, Endian, pack, unpack};
pub use cursor::Cursor;
pub use digest::{DIGEST_LEN, Digest};
pub use span::{ByteSpan, Span};
