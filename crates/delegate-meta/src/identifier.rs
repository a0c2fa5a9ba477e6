use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;
use crate::layout::ID_BYTES;

/// The 4-byte key naming one delegate's entry in a container.
///
/// Stored on the wire exactly as its bytes. The `u32` conversions use
/// big-endian order so that `0x1122_3344` is written as `11 22 33 44`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier([u8; ID_BYTES]);

impl Identifier {
    /// Wraps raw identifier bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the identifier's wire bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }

    /// Returns the identifier as a big-endian `u32`.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        BigEndian::read_u32(&self.0)
    }

    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        let mut id = [0u8; ID_BYTES];
        id.copy_from_slice(&bytes[..ID_BYTES]);
        Self(id)
    }
}

impl From<[u8; ID_BYTES]> for Identifier {
    fn from(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        let mut id = [0u8; ID_BYTES];
        BigEndian::write_u32(&mut id, value);
        Self(id)
    }
}

impl From<Identifier> for u32 {
    fn from(id: Identifier) -> Self {
        id.to_u32()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.to_u32())
    }
}

/// Parses exactly 8 hex digits, with or without a `0x` prefix.
impl FromStr for Identifier {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != ID_BYTES * 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodecError::InvalidIdentifier(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Identifier::from)
            .map_err(|_| CodecError::InvalidIdentifier(s.to_string()))
    }
}
