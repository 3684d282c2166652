//! 256-bit digest value
//!
//! [`Digest`] is the 32-byte output of SHA-256, kept in the order the
//! algorithm produces it (state words serialized big-endian). It is a plain
//! value type: comparison, hashing and hex rendering only.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use super::span::ByteSpan;
use crate::error::Error;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    pub const LEN: usize = DIGEST_LEN;

    pub const ZERO: Self = Self([0u8; DIGEST_LEN]);

    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub const fn as_span(&self) -> ByteSpan<'_> {
        ByteSpan::new(&self.0)
    }

    /// Lowercase hexadecimal rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a 64-character hexadecimal string (either case).
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(text, &mut out)?;

        Ok(Self(out))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Digest(value)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self)
    }
}
