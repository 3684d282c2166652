use proptest::prelude::*;
use sha256files::primitives::{
    BoundedBuffer, ByteOrderScalar, ByteSpan, Cursor, Endian, Span, pack, unpack,
};

const ENDIANS: [Endian; 2] = [Endian::Big, Endian::Little];

#[test]
fn u32_round_trip_selected_values() {
    for endian in ENDIANS {
        for v in [0u32, 1, 0xff, 0x100, 0x8000_0000, 0xdead_beef, u32::MAX] {
            assert_eq!(unpack::<u32>(&pack(v, endian), endian), v);
        }
    }
}

#[test]
fn u64_round_trip_selected_values() {
    for endian in ENDIANS {
        for v in [0u64, 1, 1 << 61, 1 << 63, 0x0102_0304_0506_0708, u64::MAX] {
            assert_eq!(unpack::<u64>(&pack(v, endian), endian), v);
        }
    }
}

#[test]
fn byte_positions_follow_endianness() {
    let v = 0x0102_0304u32;

    assert_eq!(pack(v, Endian::Big), [1, 2, 3, 4]);
    assert_eq!(pack(v, Endian::Little), [4, 3, 2, 1]);

    for i in 0..4 {
        assert_eq!(v.byte(i, Endian::Big), (i + 1) as u8);
        assert_eq!(v.byte(i, Endian::Little), (4 - i) as u8);
    }
}

#[test]
fn sha256_length_field_layout() {
    // 2^61 - 1 bytes is the largest message the 64-bit bit count describes
    let bits = ((1u64 << 61) - 1).wrapping_mul(8);
    assert_eq!(
        pack(bits, Endian::Big),
        [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8]
    );
}

proptest! {
    #[test]
    fn u16_round_trip(v in any::<u16>()) {
        for endian in ENDIANS {
            prop_assert_eq!(unpack::<u16>(&pack(v, endian), endian), v);
        }
    }

    #[test]
    fn u32_round_trip(v in any::<u32>()) {
        for endian in ENDIANS {
            prop_assert_eq!(unpack::<u32>(&pack(v, endian), endian), v);
            prop_assert_eq!(
                u32::unpack_span(ByteSpan::from(&pack(v, endian)), endian),
                Some(v)
            );
        }
    }

    #[test]
    fn u64_round_trip(v in any::<u64>()) {
        for endian in ENDIANS {
            prop_assert_eq!(unpack::<u64>(&pack(v, endian), endian), v);
        }
    }

    #[test]
    fn u128_round_trip(v in any::<u128>()) {
        for endian in ENDIANS {
            prop_assert_eq!(unpack::<u128>(&pack(v, endian), endian), v);
        }
    }

    #[test]
    fn big_and_little_are_mirror_images(v in any::<u64>()) {
        let mut big = pack(v, Endian::Big);
        big.reverse();
        prop_assert_eq!(big, pack(v, Endian::Little));
    }

    #[test]
    fn span_limit_stays_in_bounds(a in any::<usize>(), b in any::<usize>(), x in any::<usize>()) {
        let span = Span::new(a, b);
        let limited = span.limit(x);

        prop_assert!(span.begin() <= span.end());
        prop_assert!(limited >= span.begin() && limited <= span.end());
        prop_assert_eq!(span.count(), span.end() - span.begin());
    }

    #[test]
    fn cursor_never_leaves_its_span(
        begin in 0usize..1000,
        len in 0usize..1000,
        steps in proptest::collection::vec(0usize..300, 0..20),
    ) {
        let span = Span::with_len(begin, len);
        let mut cursor = Cursor::new(span);

        for step in steps {
            cursor.advance(step);
            prop_assert!(cursor.current() >= span.begin());
            prop_assert!(cursor.current() <= span.end());
            prop_assert_eq!(cursor.eof(), cursor.current() >= span.end());
            prop_assert_eq!(cursor.consumed() + cursor.remaining(), span.count());
        }
    }

    #[test]
    fn sub_views_stay_inside_data(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        start in 0usize..100,
        end in 0usize..100,
    ) {
        let view = ByteSpan::from(&data);
        let sub = view.sub(start, end);

        prop_assert!(sub.len() <= data.len());
        let lo = start.min(end).min(data.len());
        prop_assert_eq!(sub.as_slice(), &data[lo..lo + sub.len()]);
    }

    #[test]
    fn bounded_buffer_never_overflows(
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..20), 0..10),
    ) {
        let mut buf = BoundedBuffer::<32>::new();
        let mut expected = Vec::new();

        for chunk in &chunks {
            let written = buf.extend_from(chunk);
            expected.extend_from_slice(&chunk[..written]);
        }

        prop_assert!(buf.len() <= 32);
        prop_assert_eq!(buf.reader().as_slice(), expected.as_slice());
        prop_assert_eq!(buf.is_full(), buf.len() == 32);
    }
}
