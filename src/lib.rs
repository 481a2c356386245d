//! # voltage-bytestream
//!
//! Endian-aware binary data buffers with byte stream query and transform
//! views, built for protocol analysis pipelines that need to inspect and
//! realign raw octet windows before interpreting them as typed values.
//!
//! ## Features
//!
//! - Logical byte addressing over little- and big-endian data, with an
//!   endianness-independent mode for unstructured payloads
//! - Point and ranged membership queries (`test`, `all`, `any`, `none`)
//! - In-place direct shifts with fill and circular rotations, all
//!   allocation-free
//! - Typed value construction and read-back honoring the configured byte
//!   order
//! - Silent no-op handling of malformed arguments on the hot path
//!
//! ## Example Usage
//!
//! ```rust
//! use voltage_bytestream::{BinaryData, DataMode, Endianness, NPOS};
//!
//! // A 32-bit word captured from a big-endian wire format.
//! let mut word = BinaryData::from_u32(0x0102_0304, DataMode::DEPENDENT, Endianness::Big);
//!
//! // Logical index 0 is the least significant byte regardless of layout.
//! assert!(word.bytes().test(0, 0x04));
//! assert!(word.bytes().none(0, NPOS, 0xFF));
//!
//! // Realign the window in place: rotate one byte, then zero-pad a shift.
//! word.bytes_mut().round_shift_left(1).shift_left(1, 0x00);
//! assert_eq!(word.len(), 4);
//! ```

pub mod buffer;
pub mod byte_stream;
pub mod common;

mod shift;

// Re-export common types for convenience
pub use crate::buffer::BinaryData;
pub use crate::byte_stream::{byte_position, ByteStreamReader, ByteStreamWriter};
pub use crate::common::{BufferError, BufferResult, DataMode, Endianness, DEFAULT_FILL, NPOS};
