//! Shared constants, configuration types and errors for binary data handling.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved index value meaning "up to the end of the buffer" when used as the
/// upper bound of a ranged predicate.
pub const NPOS: usize = usize::MAX;

/// Conventional fill byte for direct shifts when the caller has no preference.
pub const DEFAULT_FILL: u8 = 0x00;

/// Byte order of stored multibyte data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// The most significant byte is stored first.
    Big,
    /// The least significant byte is stored first.
    Little,
}

impl Endianness {
    /// Endianness of the machine this code runs on.
    pub fn system() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Big => write!(f, "big-endian"),
            Endianness::Little => write!(f, "little-endian"),
        }
    }
}

/// Data handling mode flags.
///
/// `DEPENDENT` makes byte addressing honor the configured endianness;
/// `INDEPENDENT` makes addressing ignore it (the buffer is treated as a plain
/// little-endian-ordered octet sequence). The two flags are mutually
/// exclusive and [`DataMode::merged`] keeps them that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMode(u8);

impl DataMode {
    /// Byte addressing honors the configured endianness.
    pub const DEPENDENT: DataMode = DataMode(0x01);
    /// Byte addressing ignores the configured endianness.
    pub const INDEPENDENT: DataMode = DataMode(0x02);

    const KNOWN: u8 = 0x03;

    /// Build a mode from raw flag bits, discarding unknown bits.
    pub fn from_bits(bits: u8) -> Self {
        DataMode(bits & Self::KNOWN)
    }

    /// Raw flag bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// True if the `DEPENDENT` flag is set.
    #[inline]
    pub fn is_dependent(self) -> bool {
        self.0 & Self::DEPENDENT.0 != 0
    }

    /// True if the `INDEPENDENT` flag is set.
    #[inline]
    pub fn is_independent(self) -> bool {
        self.0 & Self::INDEPENDENT.0 != 0
    }

    /// Merge `other` into this mode, clearing the flag it excludes.
    ///
    /// Setting `DEPENDENT` clears `INDEPENDENT` and vice versa, so a mode can
    /// never carry both addressing flags at once.
    #[must_use]
    pub fn merged(self, other: DataMode) -> DataMode {
        let mut bits = self.0;
        if other.is_dependent() {
            bits &= !Self::INDEPENDENT.0;
            bits |= Self::DEPENDENT.0;
        } else if other.is_independent() {
            bits &= !Self::DEPENDENT.0;
            bits |= Self::INDEPENDENT.0;
        }
        DataMode(bits)
    }
}

impl Default for DataMode {
    fn default() -> Self {
        DataMode::DEPENDENT
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_independent() {
            write!(f, "independent")
        } else {
            write!(f, "dependent")
        }
    }
}

/// Errors raised at the container boundary.
///
/// The byte stream views themselves never fail: malformed arguments degrade
/// into a no-op or a `false`/`None` result. Errors exist only where a typed
/// value enters or leaves the buffer.
#[derive(Error, Debug)]
pub enum BufferError {
    /// The stored data cannot be converted to the requested type.
    #[error("Data conversion error: {0}")]
    DataConversion(String),

    /// The operation needs a non-empty buffer.
    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),
}

/// Common result type for container operations.
pub type BufferResult<T> = Result<T, BufferError>;
