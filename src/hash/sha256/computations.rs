use super::{BLOCK_WORDS, K256};

/// Number of words in the expanded message schedule.
pub const SCHEDULE_LEN: usize = 64;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands 16 message words into the 64-word schedule.
pub fn schedule(block: &[u32; BLOCK_WORDS]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    w[..BLOCK_WORDS].copy_from_slice(block);

    for i in BLOCK_WORDS..SCHEDULE_LEN {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}

/// Runs the 64 rounds over an expanded schedule and adds the result into
/// `state`.
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; SCHEDULE_LEN]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&ki, &wi) in K256.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

/// Compresses one block, given as 16 big-endian-decoded words, into `state`.
#[inline(always)]
pub fn compress(state: &mut [u32; 8], block: &[u32; BLOCK_WORDS]) {
    let w = schedule(block);
    all_rounds(state, &w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::H256_INIT;

    #[test]
    fn ch_selects_by_e() {
        assert_eq!(ch(u32::MAX, 0x1234, 0x5678), 0x1234);
        assert_eq!(ch(0, 0x1234, 0x5678), 0x5678);
    }

    #[test]
    fn maj_is_bitwise_majority() {
        assert_eq!(maj(0xf0f0, 0xf0f0, 0x0f0f), 0xf0f0);
        assert_eq!(maj(0b110, 0b011, 0b101), 0b111);
    }

    #[test]
    fn schedule_keeps_message_words() {
        let mut block = [0u32; BLOCK_WORDS];
        for (i, w) in block.iter_mut().enumerate() {
            *w = i as u32 * 0x0101_0101;
        }

        let w = schedule(&block);
        assert_eq!(&w[..BLOCK_WORDS], &block);
    }

    #[test]
    fn single_block_abc() {
        // "abc" padded to one block
        let mut block = [0u32; BLOCK_WORDS];
        block[0] = 0x6162_6380;
        block[15] = 0x0000_0018;

        let mut state = H256_INIT;
        compress(&mut state, &block);

        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }
}
