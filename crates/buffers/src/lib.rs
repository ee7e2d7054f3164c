//! Hex-text byte buffers for SFP EEPROM images.
//!
//! EEPROM contents travel through the editor as a flat hexadecimal string,
//! two characters per byte, most-significant nibble first. Every address in
//! this crate is a byte address; the character offset is always
//! `address * 2`. There is no nibble-level addressing.
//!
//! # Overview
//!
//! - [`read_hex`] / [`write_hex`] - addressed access over a raw `&str`
//! - [`HexBuffer`] - a validated, uppercase buffer with the same operations
//! - [`print_octets`] / [`hex_dump`] - debug rendering of raw bytes
//!
//! # Example
//!
//! ```
//! use sfp_buffers::{read_hex, write_hex};
//!
//! let buf = "0304010000";
//! assert_eq!(read_hex(buf, 1, 2).unwrap(), "0401");
//!
//! let next = write_hex(buf, 4, 1, "FF").unwrap();
//! assert_eq!(next, "03040100FF");
//! // The input is never mutated.
//! assert_eq!(buf, "0304010000");
//! ```

mod buffer;
mod hex_access;
mod print_octets;

pub use buffer::HexBuffer;
pub use hex_access::{read_hex, validate_hex, write_hex};
pub use print_octets::{hex_dump, print_octets};

use thiserror::Error;

/// Error type for hex buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexBufferError {
    /// The buffer text is empty or has an odd number of characters.
    #[error("invalid hex buffer (empty or odd number of characters)")]
    MalformedBuffer,
    /// The requested byte range does not fit inside the buffer.
    #[error("range {address}+{length} is outside a {size}-byte buffer")]
    OutOfRange {
        address: usize,
        length: usize,
        size: usize,
    },
    /// A replacement value has the wrong number of hex characters.
    #[error("value has {actual} hex characters, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A character outside `0-9A-Fa-f`.
    #[error("invalid hex character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
}
