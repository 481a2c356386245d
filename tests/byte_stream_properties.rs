//! End-to-end properties of the byte stream views across byte orders and
//! addressing modes.

use pretty_assertions::assert_eq;
use voltage_bytestream::{BinaryData, DataMode, Endianness, DEFAULT_FILL, NPOS};

/// Every mode/byte-order combination a buffer can carry.
fn all_layouts() -> [(DataMode, Endianness); 4] {
    [
        (DataMode::DEPENDENT, Endianness::Little),
        (DataMode::DEPENDENT, Endianness::Big),
        (DataMode::INDEPENDENT, Endianness::Little),
        (DataMode::INDEPENDENT, Endianness::Big),
    ]
}

#[test]
fn saturating_shift_fills_whole_buffer_in_every_layout() {
    for (mode, endianness) in all_layouts() {
        let mut buffer = BinaryData::from_slice(&[1, 2, 3, 4, 5], mode, endianness);
        buffer.bytes_mut().shift_left(5, 0x5A);
        assert_eq!(buffer.as_slice(), &[0x5A; 5]);

        let mut buffer = BinaryData::from_slice(&[1, 2, 3, 4, 5], mode, endianness);
        buffer.bytes_mut().shift_right(17, 0xA5);
        assert_eq!(buffer.as_slice(), &[0xA5; 5]);
    }
}

#[test]
fn round_shift_is_a_bijection_in_every_layout() {
    let original = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x42, 0x17, 0x03];
    for (mode, endianness) in all_layouts() {
        for shift in 0..=8 {
            let mut buffer = BinaryData::from_slice(&original, mode, endianness);
            buffer.bytes_mut().round_shift_left(shift);

            let mut sorted = buffer.as_slice().to_vec();
            sorted.sort_unstable();
            let mut expected = original.to_vec();
            expected.sort_unstable();
            assert_eq!(sorted, expected, "rotation must not lose bytes");

            buffer.bytes_mut().round_shift_right(shift);
            assert_eq!(buffer.as_slice(), &original, "rotations must invert");
        }
    }
}

#[test]
fn rotation_by_buffer_length_is_identity() {
    for (mode, endianness) in all_layouts() {
        let mut buffer = BinaryData::from_slice(&[9, 8, 7], mode, endianness);
        buffer.bytes_mut().round_shift_left(3).round_shift_right(6);
        assert_eq!(buffer.as_slice(), &[9, 8, 7]);
    }
}

#[test]
fn predicates_see_the_same_logical_sequence_in_both_byte_orders() {
    // 0xAABB0000 has its two zero bytes at the least significant end, i.e.
    // at the low logical indexes of any dependent view.
    let big = BinaryData::from_u32(0xAABB_0000, DataMode::DEPENDENT, Endianness::Big);
    let little = BinaryData::from_u32(0xAABB_0000, DataMode::DEPENDENT, Endianness::Little);

    for buffer in [&big, &little] {
        let bytes = buffer.bytes();
        assert!(bytes.all(0, 1, 0x00));
        assert!(bytes.test(2, 0xBB));
        assert!(bytes.test(3, 0xAA));
        assert!(bytes.any(0, NPOS, 0xAA));
        assert!(bytes.none(0, 1, 0xBB));
    }
}

#[test]
fn degenerate_ranges_answer_false() {
    let buffer = BinaryData::from_slice(&[0, 0, 0], DataMode::DEPENDENT, Endianness::Big);
    let bytes = buffer.bytes();

    assert!(!bytes.all(2, 1, 0));
    assert!(!bytes.any(2, 1, 0));
    assert!(!bytes.none(2, 1, 0));
    assert!(!bytes.all(0, 3, 0));
    assert!(!bytes.any(0, 3, 0));
    assert!(!bytes.none(0, 3, 0));
}

#[test]
fn invalid_buffer_ignores_every_operation() {
    let mut empty = BinaryData::new(0, DataMode::DEPENDENT, Endianness::Big);
    assert!(!empty.is_valid());

    empty
        .bytes_mut()
        .set(0, 0xFF)
        .shift_left(3, 0xFF)
        .round_shift_right(2);
    assert!(empty.is_empty());
    assert!(!empty.bytes().test(0, 0x00));
    assert_eq!(empty.bytes().get_at(0), None);
}

#[test]
fn shift_then_unshift_keeps_fill_marker() {
    // Direct shifts are lossy: one byte is traded for the fill marker.
    let mut buffer =
        BinaryData::from_slice(&[0x11, 0x22, 0x33, 0x44], DataMode::DEPENDENT, Endianness::Big);
    buffer
        .bytes_mut()
        .shift_left(1, DEFAULT_FILL)
        .shift_right(1, DEFAULT_FILL);
    assert_eq!(buffer.as_slice(), &[0x00, 0x22, 0x33, 0x44]);
}

#[test]
fn window_realignment_flow() {
    // A captured big-endian length field, padded by two stray bytes that a
    // lower layer left in front: [pad, pad, len_hi, len_lo].
    let mut window = BinaryData::from_slice(
        &[0xEE, 0xEE, 0x01, 0x2C],
        DataMode::INDEPENDENT,
        Endianness::Big,
    );

    // Drop the padding by shifting it out, then trim the view tags so the
    // remaining word reads as a value.
    window.bytes_mut().shift_left(2, 0x00);
    assert_eq!(window.as_slice(), &[0x01, 0x2C, 0x00, 0x00]);

    let mut value = BinaryData::from_slice(&window.as_slice()[..2], DataMode::DEPENDENT, Endianness::Big);
    assert_eq!(value.to_u16().unwrap(), 300);

    // The same field viewed little-endian after an in-place conversion.
    value.set_endianness(Endianness::Little, true);
    assert_eq!(value.as_slice(), &[0x2C, 0x01]);
    assert_eq!(value.to_u16().unwrap(), 300);
}

#[test]
fn typed_values_expose_consistent_logical_bytes() {
    let value = 0x0102_0304_0506_0708u64;
    let big = BinaryData::from_u64(value, DataMode::DEPENDENT, Endianness::Big);
    let little = BinaryData::from_u64(value, DataMode::DEPENDENT, Endianness::Little);

    for index in 0..8 {
        assert_eq!(
            big.bytes().get_at(index),
            little.bytes().get_at(index),
            "logical byte {} must not depend on the storage order",
            index
        );
    }
    assert_eq!(big.to_u64().unwrap(), little.to_u64().unwrap());
}

#[test]
fn layout_tags_serialize_for_config_files() {
    let json = serde_json::to_string(&(Endianness::Big, DataMode::INDEPENDENT)).unwrap();
    let (endianness, mode): (Endianness, DataMode) = serde_json::from_str(&json).unwrap();
    assert_eq!(endianness, Endianness::Big);
    assert_eq!(mode, DataMode::INDEPENDENT);
}
