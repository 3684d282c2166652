//! Byte-order conversions for native integers.
//!
//! Split into the byte order selector and the scalar packing trait built on
//! top of it. All conversions are explicit about byte order; nothing here
//! depends on the host's native endianness.

mod endian;
mod scalar;

pub use endian::Endian;
pub use scalar::{ByteOrderScalar, pack, unpack};
