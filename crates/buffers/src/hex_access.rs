//! Addressed read/write over hex-text buffers.

use std::ops::Range;

use crate::HexBufferError;

/// Returns the hex substring covering bytes `[address, address + length)`.
///
/// # Errors
///
/// - [`HexBufferError::MalformedBuffer`] if `hex` is empty or has odd length.
/// - [`HexBufferError::OutOfRange`] if the range runs past the end.
///
/// # Example
///
/// ```
/// use sfp_buffers::read_hex;
///
/// assert_eq!(read_hex("AABBCC", 1, 1).unwrap(), "BB");
/// assert_eq!(read_hex("AABBCC", 3, 0).unwrap(), "");
/// assert!(read_hex("AABBCC", 2, 2).is_err());
/// ```
pub fn read_hex(hex: &str, address: usize, length: usize) -> Result<&str, HexBufferError> {
    let range = char_range(hex, address, length)?;
    hex.get(range).ok_or(HexBufferError::MalformedBuffer)
}

/// Returns a new buffer with bytes `[address, address + length)` replaced by
/// `new_value`. The input buffer is left untouched.
///
/// # Errors
///
/// Same as [`read_hex`], plus [`HexBufferError::SizeMismatch`] when
/// `new_value` is not exactly `length * 2` characters and
/// [`HexBufferError::InvalidCharacter`] when it is not hex.
pub fn write_hex(
    hex: &str,
    address: usize,
    length: usize,
    new_value: &str,
) -> Result<String, HexBufferError> {
    ensure_well_formed(hex)?;
    let expected = length.checked_mul(2).ok_or(HexBufferError::OutOfRange {
        address,
        length,
        size: hex.len() / 2,
    })?;
    if new_value.len() != expected {
        return Err(HexBufferError::SizeMismatch {
            expected,
            actual: new_value.len(),
        });
    }
    let range = char_range(hex, address, length)?;
    validate_hex(new_value)?;

    let head = hex.get(..range.start).ok_or(HexBufferError::MalformedBuffer)?;
    let tail = hex.get(range.end..).ok_or(HexBufferError::MalformedBuffer)?;
    let mut out = String::with_capacity(hex.len());
    out.push_str(head);
    out.push_str(new_value);
    out.push_str(tail);
    Ok(out)
}

/// Checks that every character of `text` is a hex digit.
pub fn validate_hex(text: &str) -> Result<(), HexBufferError> {
    match text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((position, found)) => Err(HexBufferError::InvalidCharacter { position, found }),
        None => Ok(()),
    }
}

fn ensure_well_formed(hex: &str) -> Result<(), HexBufferError> {
    if hex.is_empty() || hex.len() % 2 != 0 {
        return Err(HexBufferError::MalformedBuffer);
    }
    Ok(())
}

fn char_range(hex: &str, address: usize, length: usize) -> Result<Range<usize>, HexBufferError> {
    ensure_well_formed(hex)?;
    let out_of_range = HexBufferError::OutOfRange {
        address,
        length,
        size: hex.len() / 2,
    };
    let end_byte = address.checked_add(length).ok_or_else(|| out_of_range.clone())?;
    let end = end_byte.checked_mul(2).ok_or_else(|| out_of_range.clone())?;
    if end > hex.len() {
        return Err(out_of_range);
    }
    Ok(address * 2..end)
}
