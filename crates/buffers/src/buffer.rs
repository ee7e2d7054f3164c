//! Validated hex-text buffer.

use std::fmt;
use std::str::FromStr;

use crate::hex_access::{read_hex, validate_hex, write_hex};
use crate::HexBufferError;

/// An owned EEPROM image in uppercase hex text.
///
/// Invariants: non-empty, even length, hex digits only, uppercase. Writes
/// return a new buffer; an existing `HexBuffer` never changes.
///
/// # Example
///
/// ```
/// use sfp_buffers::HexBuffer;
///
/// let buf: HexBuffer = "0a0b0c".parse().unwrap();
/// assert_eq!(buf.as_str(), "0A0B0C");
/// assert_eq!(buf.byte_len(), 3);
///
/// let next = buf.write(2, 1, "ff").unwrap();
/// assert_eq!(next.as_str(), "0A0BFF");
/// assert_eq!(buf.as_str(), "0A0B0C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexBuffer(String);

impl HexBuffer {
    /// Parses hex text, normalizing it to uppercase.
    pub fn parse(text: &str) -> Result<Self, HexBufferError> {
        if text.is_empty() || text.len() % 2 != 0 {
            return Err(HexBufferError::MalformedBuffer);
        }
        validate_hex(text)?;
        Ok(Self(text.to_ascii_uppercase()))
    }

    /// Builds a buffer from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HexBufferError> {
        if bytes.is_empty() {
            return Err(HexBufferError::MalformedBuffer);
        }
        Ok(Self(hex::encode_upper(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of bytes held.
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }

    /// Hex text for bytes `[address, address + length)`.
    pub fn read(&self, address: usize, length: usize) -> Result<&str, HexBufferError> {
        read_hex(&self.0, address, length)
    }

    /// Raw bytes for `[address, address + length)`.
    pub fn bytes(&self, address: usize, length: usize) -> Result<Vec<u8>, HexBufferError> {
        decode_validated(self.read(address, length)?)
    }

    /// The whole buffer as raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HexBufferError> {
        decode_validated(&self.0)
    }

    /// Returns a copy with `[address, address + length)` replaced by
    /// `new_value` (any case; stored uppercase).
    pub fn write(
        &self,
        address: usize,
        length: usize,
        new_value: &str,
    ) -> Result<HexBuffer, HexBufferError> {
        let upper = new_value.to_ascii_uppercase();
        write_hex(&self.0, address, length, &upper).map(Self)
    }

    /// Returns a copy with the single byte at `address` set to `value`.
    pub fn write_byte(&self, address: usize, value: u8) -> Result<HexBuffer, HexBufferError> {
        self.write(address, 1, &format!("{value:02X}"))
    }
}

fn decode_validated(text: &str) -> Result<Vec<u8>, HexBufferError> {
    hex::decode(text).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => HexBufferError::InvalidCharacter {
            position: index,
            found: c,
        },
        _ => HexBufferError::MalformedBuffer,
    })
}

impl FromStr for HexBuffer {
    type Err = HexBufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexBuffer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(HexBuffer::parse("abCD").unwrap().as_str(), "ABCD");
    }

    #[test]
    fn parse_rejects_bad_text() {
        assert_eq!(HexBuffer::parse(""), Err(HexBufferError::MalformedBuffer));
        assert_eq!(HexBuffer::parse("ABC"), Err(HexBufferError::MalformedBuffer));
        assert_eq!(
            HexBuffer::parse("A G1"),
            Err(HexBufferError::InvalidCharacter {
                position: 1,
                found: ' '
            })
        );
    }

    #[test]
    fn bytes_round_trip() {
        let buf = HexBuffer::from_bytes(&[0x03, 0x04, 0xff]).unwrap();
        assert_eq!(buf.as_str(), "0304FF");
        assert_eq!(buf.to_bytes().unwrap(), vec![0x03, 0x04, 0xff]);
        assert_eq!(buf.bytes(1, 2).unwrap(), vec![0x04, 0xff]);
    }

    #[test]
    fn write_byte_uppercases() {
        let buf = HexBuffer::parse("0000").unwrap();
        assert_eq!(buf.write_byte(1, 0xab).unwrap().as_str(), "00AB");
    }
}
