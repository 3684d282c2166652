//! Packing fixed-width integers to and from ordered byte arrays.

use std::mem::size_of;

use super::endian::Endian;
use crate::primitives::span::ByteSpan;

/// A fixed-width unsigned integer with a byte-order aware byte mapping.
///
/// `unpack(pack(v, e), e) == v` holds for every value and both byte orders.
pub trait ByteOrderScalar: Copy + Sized {
    /// Width of the integer in bytes.
    const WIDTH: usize;

    const ZERO: Self;

    /// Byte array of exactly `WIDTH` bytes.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default;

    /// Reads byte `index` (`0..WIDTH`) of the value under `endian`.
    fn byte(self, index: usize, endian: Endian) -> u8;

    /// Returns the value with byte `index` replaced by `byte`.
    fn with_byte(self, byte: u8, index: usize, endian: Endian) -> Self;

    fn pack(self, endian: Endian) -> Self::Bytes {
        let mut out = Self::Bytes::default();

        for (i, slot) in out.as_mut().iter_mut().enumerate() {
            *slot = self.byte(i, endian);
        }

        out
    }

    fn unpack(bytes: &Self::Bytes, endian: Endian) -> Self {
        bytes
            .as_ref()
            .iter()
            .enumerate()
            .fold(Self::ZERO, |acc, (i, &b)| acc.with_byte(b, i, endian))
    }

    /// Decodes a value from a span of exactly `WIDTH` bytes.
    ///
    /// Returns `None` when the span length does not match the width.
    fn unpack_span(span: ByteSpan<'_>, endian: Endian) -> Option<Self> {
        if span.len() != Self::WIDTH {
            return None;
        }

        Some(
            span.iter()
                .enumerate()
                .fold(Self::ZERO, |acc, (i, b)| acc.with_byte(b, i, endian)),
        )
    }
}

macro_rules! impl_byte_order_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl ByteOrderScalar for $ty {
            const WIDTH: usize = size_of::<$ty>();
            const ZERO: Self = 0;

            type Bytes = [u8; size_of::<$ty>()];

            #[inline(always)]
            fn byte(self, index: usize, endian: Endian) -> u8 {
                (self >> endian.shift(index, Self::WIDTH)) as u8
            }

            #[inline(always)]
            fn with_byte(self, byte: u8, index: usize, endian: Endian) -> Self {
                let shift = endian.shift(index, Self::WIDTH);

                (self & !((0xff as $ty) << shift)) | ((byte as $ty) << shift)
            }
        }
    )*};
}

impl_byte_order_scalar!(u16, u32, u64, u128);

/// Packs `value` into its byte array under `endian`.
pub fn pack<T: ByteOrderScalar>(value: T, endian: Endian) -> T::Bytes {
    value.pack(endian)
}

/// Rebuilds a value from its byte array under `endian`.
pub fn unpack<T: ByteOrderScalar>(bytes: &T::Bytes, endian: Endian) -> T {
    T::unpack(bytes, endian)
}
