//! Fixed-capacity byte buffer with a tracked fill length.
//!
//! Writes go through a [`Cursor`] over `[0, N)`, so the buffer can never be
//! written past its capacity, and reads only ever expose the filled prefix.

use super::cursor::Cursor;
use super::span::{ByteSpan, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedBuffer<const N: usize> {
    data: [u8; N],
    cursor: Cursor,
}

impl<const N: usize> BoundedBuffer<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            data: [0u8; N],
            cursor: Cursor::new(Span::new(0, N)),
        }
    }

    /// Appends one byte. Returns `false`, leaving the buffer untouched, when
    /// it is already full.
    pub fn push(&mut self, byte: u8) -> bool {
        match self.cursor.next_index() {
            Some(index) => {
                self.data[index] = byte;
                true
            }
            None => false,
        }
    }

    /// Appends as many bytes of `bytes` as fit and returns how many were
    /// written.
    pub fn extend_from<'a>(&mut self, bytes: impl Into<ByteSpan<'a>>) -> usize {
        let bytes = bytes.into();
        let (fits, _) = bytes.split_at(self.cursor.remaining());
        let start = self.cursor.current();

        self.data[start..start + fits.len()].copy_from_slice(fits.as_slice());
        self.cursor.advance(fits.len());

        fits.len()
    }

    pub const fn len(&self) -> usize {
        self.cursor.consumed()
    }

    pub const fn is_empty(&self) -> bool {
        self.cursor.consumed() == 0
    }

    pub const fn is_full(&self) -> bool {
        self.cursor.eof()
    }

    pub const fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Read-only view of the filled prefix.
    pub fn reader(&self) -> ByteSpan<'_> {
        ByteSpan::new(&self.data[..self.len()])
    }

    /// Zeroes the storage and rewinds the fill position.
    pub fn clear(&mut self) {
        self.data = [0u8; N];
        self.cursor.rewind();
    }

    /// Consumes the buffer and returns the whole backing array, including
    /// any unfilled (zero) tail.
    pub fn into_array(self) -> [u8; N] {
        self.data
    }
}

impl<const N: usize> Default for BoundedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
