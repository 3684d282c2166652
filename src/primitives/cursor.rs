//! Clamped position within a [`Span`].

use super::span::Span;

/// Mutable position inside a [`Span`].
///
/// The position never leaves `[begin, end]`. Resting on `end` means the
/// cursor has consumed the whole span, which is what [`Cursor::eof`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    span: Span,
    current: usize,
}

impl Cursor {
    pub const fn new(span: Span) -> Self {
        Self {
            span,
            current: span.begin(),
        }
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    /// Current position, always within `[begin, end]`.
    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn eof(&self) -> bool {
        self.current >= self.span.end()
    }

    /// Moves forward by `n`, stopping at `end`.
    pub const fn advance(&mut self, n: usize) {
        self.current = self.span.limit(self.current.saturating_add(n));
    }

    /// Returns the current position and steps past it, or `None` at eof.
    pub const fn next_index(&mut self) -> Option<usize> {
        if self.eof() {
            return None;
        }

        let index = self.current;
        self.current += 1;

        Some(index)
    }

    /// Moves to `begin + offset`, clamped to the span.
    pub const fn seek(&mut self, offset: usize) {
        self.current = self.span.limit(self.span.begin().saturating_add(offset));
    }

    pub const fn rewind(&mut self) {
        self.current = self.span.begin();
    }

    /// Positions already passed (`current - begin`).
    pub const fn consumed(&self) -> usize {
        self.current - self.span.begin()
    }

    /// Positions left before eof (`end - current`).
    pub const fn remaining(&self) -> usize {
        self.span.end() - self.current
    }
}
