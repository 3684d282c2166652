//! Bounded index ranges and read-only byte views
//!
//! [`Span`] is an ordered, half-open `[begin, end)` range of indices. Its
//! constructor normalizes the bounds, so `begin <= end` always holds, and
//! every index it hands out is clamped into the range.
//!
//! [`ByteSpan`] is a zero-copy, read-only view over contiguous bytes. All of
//! its sub-view operations go through a `Span`, which keeps them inside the
//! underlying slice whatever indices the caller passes.

use std::fmt;
use std::iter::Copied;
use std::ops::{Index, Range};
use std::slice;

use super::cursor::Cursor;

/// Ordered `[begin, end)` range of indices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    begin: usize,
    end: usize,
}

impl Span {
    /// Builds a span from two bounds given in any order.
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { begin: a, end: b }
        } else {
            Self { begin: b, end: a }
        }
    }

    /// Builds the span `[begin, begin + len)`, saturating at `usize::MAX`.
    pub const fn with_len(begin: usize, len: usize) -> Self {
        Self::new(begin, begin.saturating_add(len))
    }

    pub const fn begin(&self) -> usize {
        self.begin
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered (`end - begin`).
    pub const fn count(&self) -> usize {
        self.end - self.begin
    }

    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Clamps `index` into `[begin, end]`.
    ///
    /// The upper bound is inclusive: `end` is the valid "one past the last"
    /// position a cursor may rest on.
    pub const fn limit(&self, index: usize) -> usize {
        if index < self.begin {
            self.begin
        } else if index > self.end {
            self.end
        } else {
            index
        }
    }

    /// Returns `true` if `index` lies in `[begin, end)`.
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.begin && index < self.end
    }

    /// Restricts `other` to the part that lies inside `self`.
    ///
    /// Disjoint spans intersect to an empty span located on the nearest
    /// bound of `self`.
    pub const fn intersect(&self, other: Span) -> Span {
        Span::new(self.limit(other.begin), self.limit(other.end))
    }

    pub const fn as_range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// Zero-copy read-only view over a contiguous byte region.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteSpan<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSpan<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The span of valid indices of this view, always starting at zero.
    pub const fn span(&self) -> Span {
        Span::new(0, self.bytes.len())
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte at `index`, or `None` past the end of the view.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Sub-view over `[start, end)`, clamped to this view.
    ///
    /// Out-of-range bounds shrink the result instead of panicking, so the
    /// returned view may be shorter than requested.
    pub fn sub(&self, start: usize, end: usize) -> ByteSpan<'a> {
        let range = self.span().intersect(Span::new(start, end));
        ByteSpan {
            bytes: &self.bytes[range.as_range()],
        }
    }

    /// Splits the view at `mid`, clamped to the length of the view.
    pub fn split_at(&self, mid: usize) -> (ByteSpan<'a>, ByteSpan<'a>) {
        let mid = self.span().limit(mid);
        (self.sub(0, mid), self.sub(mid, self.len()))
    }

    /// A cursor positioned at the first byte of this view.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.span())
    }

    pub fn iter(&self) -> Copied<slice::Iter<'a, u8>> {
        self.bytes.iter().copied()
    }

    pub const fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Index<usize> for ByteSpan<'_> {
    type Output = u8;

    /// # Panics
    /// Panics if `index` is outside the view. Reading past a span is a
    /// programming error, never a recoverable condition.
    fn index(&self, index: usize) -> &u8 {
        assert!(
            self.span().contains(index),
            "index {} outside byte span of length {}",
            index,
            self.len()
        );

        &self.bytes[index]
    }
}

impl<'a> IntoIterator for ByteSpan<'a> {
    type Item = u8;
    type IntoIter = Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> From<&'a [u8]> for ByteSpan<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteSpan::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSpan<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        ByteSpan::new(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ByteSpan<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        ByteSpan::new(bytes)
    }
}

impl<'a> From<&'a str> for ByteSpan<'a> {
    fn from(text: &'a str) -> Self {
        ByteSpan::new(text.as_bytes())
    }
}

impl AsRef<[u8]> for ByteSpan<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl fmt::Debug for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSpan({} bytes)", self.len())
    }
}
