//! SHA-256 streaming engine
//!
//! [`Sha256`] absorbs a message in arbitrary caller-chosen pieces (single
//! bytes, exact 64-byte blocks, or slices of any length) and produces the
//! same digest as hashing the whole message at once.
//!
//! # Lifecycle
//!
//! An engine is [`State::Ready`] when created or reset, becomes
//! [`State::Accumulating`] once a message byte is absorbed, and
//! [`State::Finalized`] after [`Sha256::finalize`] or [`Sha256::hash`].
//!
//! Finalizing is idempotent: the digest is cached and returned again until
//! a new byte arrives. Adding a byte to a finalized engine restarts it, as if
//! [`Sha256::reset`] had been called first, so one engine can be reused for
//! any number of independent messages. Callers that want to be explicit can
//! always call `reset()` themselves.
//!
//! # Notes
//! - Message words are assembled big-endian, as FIPS 180-4 requires.
//! - The byte counter is a `u64`, which covers the full 2^61-byte range the
//!   64-bit length field can describe.
//! - No heap allocations are performed.

use std::io;

use tracing::trace;

use super::computations::compress;
use super::{BLOCK_LEN, BLOCK_WORDS, H256_INIT, LENGTH_FIELD_LEN};
use crate::primitives::{
    BoundedBuffer, ByteOrderScalar, ByteSpan, Cursor, DIGEST_LEN, Digest, Endian, Span,
};

/// Observable lifecycle state of a [`Sha256`] engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Freshly created or reset; nothing absorbed.
    Ready,
    /// At least one message byte absorbed, digest not yet computed.
    Accumulating,
    /// Digest computed and cached.
    Finalized,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Open,
    Finalized { payload_length: u64 },
}

/// Incremental SHA-256 hasher.
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: [u32; 8],
    words: [u32; BLOCK_WORDS],
    filled: Cursor,
    length: u64,
    phase: Phase,
    digest: Digest,
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            words: [0u32; BLOCK_WORDS],
            filled: Cursor::new(Span::new(0, BLOCK_LEN)),
            length: 0,
            phase: Phase::Open,
            digest: Digest::ZERO,
        }
    }

    /// Returns the engine to [`State::Ready`].
    pub fn reset(&mut self) -> &mut Self {
        self.state = H256_INIT;
        self.words = [0u32; BLOCK_WORDS];
        self.filled.rewind();
        self.length = 0;
        self.phase = Phase::Open;
        self.digest = Digest::ZERO;

        self
    }

    pub fn state(&self) -> State {
        match self.phase {
            Phase::Finalized { .. } => State::Finalized,
            Phase::Open if self.length == 0 && self.filled.consumed() == 0 => State::Ready,
            Phase::Open => State::Accumulating,
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized { .. })
    }

    /// Number of message bytes absorbed, including those still buffered.
    ///
    /// Once finalized, this is the length of the message the cached digest
    /// covers; padding is never counted.
    pub fn payload_length(&self) -> u64 {
        match self.phase {
            Phase::Finalized { payload_length } => payload_length,
            Phase::Open => self.length + self.filled.consumed() as u64,
        }
    }

    /// Bytes currently waiting in the block accumulator (`0..64`).
    pub fn buffered(&self) -> usize {
        self.filled.consumed()
    }

    /// Absorbs one message byte.
    pub fn add_byte(&mut self, byte: u8) -> &mut Self {
        self.restart_if_finalized();
        self.absorb(byte);

        self
    }

    /// Absorbs a span of message bytes.
    ///
    /// When the accumulator is empty and `block` is exactly one block long,
    /// its words are decoded directly and compressed in one step. Any other
    /// span is absorbed byte by byte. Both routes leave the engine in the
    /// same state for the same bytes.
    pub fn add_block<'a>(&mut self, block: impl Into<ByteSpan<'a>>) -> &mut Self {
        let block = block.into();

        if block.is_empty() {
            return self;
        }

        self.restart_if_finalized();

        if self.filled.consumed() == 0 && block.len() == BLOCK_LEN {
            for (i, word) in self.words.iter_mut().enumerate() {
                let Some(value) = u32::unpack_span(block.sub(i * 4, i * 4 + 4), Endian::Big)
                else {
                    unreachable!("a 64-byte block splits into sixteen 4-byte words");
                };

                *word = value;
            }

            self.filled.seek(BLOCK_LEN);
            self.process_block();
        } else {
            for byte in block {
                self.absorb(byte);
            }
        }

        self
    }

    /// Absorbs a slice of any length.
    ///
    /// Completes a partially filled block first, then hands every whole
    /// 64-byte block to [`Sha256::add_block`], then buffers the remainder.
    pub fn update<'a>(&mut self, data: impl Into<ByteSpan<'a>>) -> &mut Self {
        let data = data.into();

        if data.is_empty() {
            return self;
        }

        self.restart_if_finalized();

        let (head, mut rest) = data.split_at(self.filled.remaining() % BLOCK_LEN);
        for byte in head {
            self.absorb(byte);
        }

        while rest.len() >= BLOCK_LEN {
            let (block, tail) = rest.split_at(BLOCK_LEN);
            self.add_block(block);
            rest = tail;
        }

        for byte in rest {
            self.absorb(byte);
        }

        self
    }

    /// Pads the message, compresses the final block(s) and caches the digest.
    ///
    /// Calling it again without new input returns the cached digest.
    pub fn finalize(&mut self) -> Digest {
        if self.is_finalized() {
            return self.digest;
        }

        let payload_length = self.payload_length();

        self.absorb(0x80);
        self.pad_with_zeros(BLOCK_LEN - LENGTH_FIELD_LEN);

        for byte in payload_length.wrapping_mul(8).pack(Endian::Big) {
            self.absorb(byte);
        }

        debug_assert_eq!(self.filled.consumed(), 0, "length field closes the block");

        self.digest = self.serialize_state();
        self.phase = Phase::Finalized { payload_length };

        trace!(payload_length, digest = %self.digest, "sha256 finalized");

        self.digest
    }

    /// Finalizes if needed and returns a view of the digest.
    pub fn hash(&mut self) -> &Digest {
        self.finalize();

        &self.digest
    }

    /// FIPS 180-4 compression of the accumulated block.
    fn process_block(&mut self) {
        compress(&mut self.state, &self.words);

        self.length = self.length.wrapping_add(BLOCK_LEN as u64);
        self.filled.rewind();
    }

    fn absorb(&mut self, byte: u8) {
        let Some(index) = self.filled.next_index() else {
            unreachable!("block accumulator is drained as soon as it fills");
        };

        let word = &mut self.words[index / 4];
        *word = word.with_byte(byte, index % 4, Endian::Big);

        if self.filled.eof() {
            self.process_block();
        }
    }

    /// Zero-fills up to offset `boundary` of a block.
    ///
    /// If the accumulator already holds more than `boundary` bytes, the
    /// current block is closed with zeros first and the fill continues in
    /// a fresh block.
    fn pad_with_zeros(&mut self, boundary: usize) {
        if self.filled.consumed() > boundary {
            while self.filled.consumed() != 0 {
                self.absorb(0);
            }
        }

        while self.filled.consumed() < boundary {
            self.absorb(0);
        }
    }

    fn serialize_state(&self) -> Digest {
        let mut out = BoundedBuffer::<DIGEST_LEN>::new();

        for word in self.state {
            out.extend_from(&word.pack(Endian::Big));
        }

        assert!(out.is_full(), "eight state words fill the digest exactly");

        Digest::from(out.into_array())
    }

    fn restart_if_finalized(&mut self) {
        if let Phase::Finalized { payload_length } = self.phase {
            trace!(
                previous_length = payload_length,
                "input after finalize, restarting engine"
            );
            self.reset();
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets byte sources stream into an engine with `io::copy` and friends.
impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the SHA-256 digest of `input` in one call.
pub fn sha256(input: &[u8]) -> Digest {
    Sha256::new().update(input).finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Digest as _;

    fn reference(input: &[u8]) -> [u8; 32] {
        sha2::Sha256::digest(input).into()
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 + 7) as u8).collect()
    }

    #[test]
    fn new_engine_is_ready() {
        let engine = Sha256::new();
        assert_eq!(engine.state(), State::Ready);
        assert_eq!(engine.payload_length(), 0);
    }

    #[test]
    fn state_transitions() {
        let mut engine = Sha256::new();

        engine.add_byte(b'a');
        assert_eq!(engine.state(), State::Accumulating);

        engine.finalize();
        assert_eq!(engine.state(), State::Finalized);

        engine.add_byte(b'b');
        assert_eq!(engine.state(), State::Accumulating);
        assert_eq!(engine.payload_length(), 1);

        engine.reset();
        assert_eq!(engine.state(), State::Ready);
    }

    #[test]
    fn full_block_without_remainder_is_accumulating() {
        let mut engine = Sha256::new();
        engine.update(&[0u8; 64]);

        assert_eq!(engine.buffered(), 0);
        assert_eq!(engine.state(), State::Accumulating);
        assert_eq!(engine.payload_length(), 64);
    }

    #[test]
    fn payload_length_survives_finalize() {
        let mut engine = Sha256::new();
        engine.update(&pattern(130));
        engine.finalize();

        assert_eq!(engine.payload_length(), 130);
    }

    #[test]
    fn padding_boundaries_mod_64() {
        for base in [0usize, 64, 128] {
            for rem in 55..=64 {
                let input = pattern(base + rem);

                let mut engine = Sha256::new();
                for &b in &input {
                    engine.add_byte(b);
                }

                assert_eq!(
                    engine.hash().as_bytes(),
                    &reference(&input),
                    "length {}",
                    input.len()
                );
            }
        }
    }

    #[test]
    fn fast_path_matches_byte_path_state() {
        let block = pattern(64);

        let mut fast = Sha256::new();
        fast.add_block(&block);

        let mut slow = Sha256::new();
        for &b in &block {
            slow.add_byte(b);
        }

        assert_eq!(fast.state, slow.state);
        assert_eq!(fast.length, slow.length);
        assert_eq!(fast.buffered(), slow.buffered());
    }

    #[test]
    fn empty_add_block_keeps_cached_digest() {
        let mut engine = Sha256::new();
        engine.update(b"abc");
        let first = engine.finalize();

        engine.add_block(&[] as &[u8]);
        assert!(engine.is_finalized());
        assert_eq!(engine.finalize(), first);
    }

    #[test]
    fn io_write_feeds_engine() {
        use std::io::Write;

        let input = pattern(1000);
        let mut engine = Sha256::new();
        engine.write_all(&input).unwrap();

        assert_eq!(engine.hash().as_bytes(), &reference(&input));
    }
}
