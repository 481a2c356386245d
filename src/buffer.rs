//! Owned binary data container with endianness and handling-mode tags.
//!
//! [`BinaryData`] is the descriptor every byte stream view is bound to: a
//! contiguous octet buffer plus the byte order and addressing mode that
//! decide how logical indexes map onto it. A buffer with zero length is
//! invalid and every view operation on it is a silent no-op.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::debug;

use crate::byte_stream::{ByteStreamReader, ByteStreamWriter};
use crate::common::{BufferError, BufferResult, DataMode, Endianness};

/// Contiguous octet buffer tagged with a byte order and an addressing mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryData {
    data: Vec<u8>,
    endianness: Endianness,
    mode: DataMode,
}

impl Default for BinaryData {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            endianness: Endianness::system(),
            mode: DataMode::default(),
        }
    }
}

impl BinaryData {
    /// Allocate a zero-filled buffer of `size` bytes.
    ///
    /// A `size` of zero yields an invalid buffer on which every view
    /// operation is a no-op.
    pub fn new(size: usize, mode: DataMode, endianness: Endianness) -> Self {
        Self {
            data: vec![0u8; size],
            endianness,
            mode,
        }
    }

    /// Build a buffer holding a copy of `data`.
    pub fn from_slice(data: &[u8], mode: DataMode, endianness: Endianness) -> Self {
        Self::from_vec(data.to_vec(), mode, endianness)
    }

    /// Build a buffer taking ownership of `data`.
    pub fn from_vec(data: Vec<u8>, mode: DataMode, endianness: Endianness) -> Self {
        Self {
            data,
            endianness,
            mode,
        }
    }

    /// Build a 2-byte buffer storing `value` in the given byte order.
    pub fn from_u16(value: u16, mode: DataMode, endianness: Endianness) -> Self {
        let mut data = vec![0u8; 2];
        match endianness {
            Endianness::Big => BigEndian::write_u16(&mut data, value),
            Endianness::Little => LittleEndian::write_u16(&mut data, value),
        }
        Self::from_vec(data, mode, endianness)
    }

    /// Build a 4-byte buffer storing `value` in the given byte order.
    pub fn from_u32(value: u32, mode: DataMode, endianness: Endianness) -> Self {
        let mut data = vec![0u8; 4];
        match endianness {
            Endianness::Big => BigEndian::write_u32(&mut data, value),
            Endianness::Little => LittleEndian::write_u32(&mut data, value),
        }
        Self::from_vec(data, mode, endianness)
    }

    /// Build an 8-byte buffer storing `value` in the given byte order.
    pub fn from_u64(value: u64, mode: DataMode, endianness: Endianness) -> Self {
        let mut data = vec![0u8; 8];
        match endianness {
            Endianness::Big => BigEndian::write_u64(&mut data, value),
            Endianness::Little => LittleEndian::write_u64(&mut data, value),
        }
        Self::from_vec(data, mode, endianness)
    }

    /// Read the stored bytes back as a `u16` honoring the endianness tag.
    pub fn to_u16(&self) -> BufferResult<u16> {
        self.check_width(2)?;
        Ok(match self.endianness {
            Endianness::Big => BigEndian::read_u16(&self.data),
            Endianness::Little => LittleEndian::read_u16(&self.data),
        })
    }

    /// Read the stored bytes back as a `u32` honoring the endianness tag.
    pub fn to_u32(&self) -> BufferResult<u32> {
        self.check_width(4)?;
        Ok(match self.endianness {
            Endianness::Big => BigEndian::read_u32(&self.data),
            Endianness::Little => LittleEndian::read_u32(&self.data),
        })
    }

    /// Read the stored bytes back as a `u64` honoring the endianness tag.
    pub fn to_u64(&self) -> BufferResult<u64> {
        self.check_width(8)?;
        Ok(match self.endianness {
            Endianness::Big => BigEndian::read_u64(&self.data),
            Endianness::Little => LittleEndian::read_u64(&self.data),
        })
    }

    fn check_width(&self, width: usize) -> BufferResult<()> {
        if self.data.is_empty() {
            return Err(BufferError::InvalidBuffer("buffer is empty".to_string()));
        }
        if self.data.len() != width {
            return Err(BufferError::DataConversion(format!(
                "expected {} bytes, buffer holds {}",
                width,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Replace the stored bytes with a copy of `data`.
    pub fn assign(&mut self, data: &[u8]) {
        debug!("Assigning {} bytes to buffer", data.len());
        self.data.clear();
        self.data.extend_from_slice(data);
    }

    /// Number of stored bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if the buffer can be queried and transformed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    /// Configured byte order.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Configured handling mode.
    #[inline]
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Retag the buffer with a new byte order.
    ///
    /// With `convert` set, the stored bytes are reversed in place so the
    /// represented value is preserved under the new tag. Retagging to the
    /// current byte order is a no-op.
    pub fn set_endianness(&mut self, endianness: Endianness, convert: bool) {
        if self.endianness == endianness {
            return;
        }
        self.endianness = endianness;
        if convert {
            debug!(
                "Converting {} bytes to {} representation",
                self.data.len(),
                endianness
            );
            self.data.reverse();
        }
    }

    /// Update the handling mode, keeping exclusive flags consistent.
    pub fn set_mode(&mut self, mode: DataMode) {
        self.mode = self.mode.merged(mode);
    }

    /// Byte at the physical offset `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Stored bytes in physical order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Stored bytes in physical order, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Drop the stored bytes, leaving an invalid buffer. Tags are kept.
    pub fn clear(&mut self) {
        debug!("Clearing {} byte buffer", self.data.len());
        self.data.clear();
    }

    /// Drop the stored bytes and restore the default tags.
    pub fn reset(&mut self) {
        self.clear();
        self.mode = DataMode::default();
        self.endianness = Endianness::system();
    }

    /// Stored bytes rendered as a lowercase hex string, physical order.
    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.data)
    }

    /// Borrow the read-only byte stream view.
    #[inline]
    pub fn bytes(&self) -> ByteStreamReader<'_> {
        ByteStreamReader::new(self)
    }

    /// Borrow the mutating byte stream view.
    #[inline]
    pub fn bytes_mut(&mut self) -> ByteStreamWriter<'_> {
        ByteStreamWriter::new(self)
    }
}
