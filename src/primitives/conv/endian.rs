//! Byte order selection.

/// Byte order used when mapping an integer to and from bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first (network order, used by SHA-2).
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Bit offset of byte `index` inside a `width`-byte integer.
    ///
    /// Little endian places byte `i` at bit `8 * i`; big endian places it at
    /// bit `8 * (width - 1 - i)`.
    ///
    /// # Panics
    /// Panics if `index >= width`.
    #[inline(always)]
    pub const fn shift(self, index: usize, width: usize) -> u32 {
        assert!(index < width, "byte index outside scalar width");

        let position = match self {
            Endian::Little => index,
            Endian::Big => width - 1 - index,
        };

        (position * 8) as u32
    }
}
