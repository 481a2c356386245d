//! Walks through inspecting and realigning a captured protocol frame with
//! the byte stream views.
//!
//! Run with `RUST_LOG=debug cargo run --example inspect_frame` to see the
//! container-level tracing output.

use voltage_bytestream::{BinaryData, DataMode, Endianness, NPOS};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A frame fragment as it arrived from the wire: big-endian, with the
    // sequence counter in the middle and two alignment bytes in front.
    let mut frame = BinaryData::from_slice(
        &[0x00, 0x00, 0x12, 0x34, 0x56, 0x78],
        DataMode::DEPENDENT,
        Endianness::Big,
    );
    println!("captured frame: {}", frame.to_hex_string());

    // Point and ranged queries address bytes logically, least significant
    // byte first.
    println!("logical byte 0 is 0x78: {}", frame.bytes().test(0, 0x78));
    println!(
        "frame carries a 0x34 byte: {}",
        frame.bytes().any(0, NPOS, 0x34)
    );
    println!(
        "leading pad is all zero: {}",
        frame.bytes().all(4, 5, 0x00)
    );

    // Shift the alignment bytes out: the counter slides to the front of the
    // physical window and zeros enter at the least significant end.
    frame.bytes_mut().shift_left(2, 0x00);
    println!("realigned frame: {}", frame.to_hex_string());

    // Rotations preserve every byte; a full cycle restores the frame.
    frame.bytes_mut().round_shift_left(3).round_shift_right(3);
    println!("after rotate round trip: {}", frame.to_hex_string());

    // Interpret the first four physical bytes as the counter value.
    let counter = BinaryData::from_slice(&frame.as_slice()[..4], DataMode::DEPENDENT, Endianness::Big);
    match counter.to_u32() {
        Ok(value) => println!("sequence counter: {:#010X}", value),
        Err(err) => println!("counter not readable: {}", err),
    }
}
