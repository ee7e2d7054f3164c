//! Format-preserving codec for `begin-base64` EEPROM envelopes.
//!
//! SFP configuration exports wrap the EEPROM image in a text block whose
//! Base64 payload is cut into `@`-separated chunks, with header text before
//! the first `@` and end-marker noise after the payload. This crate decodes
//! such a block into bytes plus an [`EnvelopeFormat`] and rebuilds the exact
//! same text shape around an edited payload.
//!
//! # Example
//!
//! ```
//! use sfp_base64::{decode_envelope, encode_envelope};
//!
//! let text = "begin-base64 644 sfp_a2_info @QUJD@Q==\n";
//! let decoded = decode_envelope(text).unwrap();
//! assert_eq!(decoded.hex, "414243");
//! assert_eq!(decoded.format.prefix, "begin-base64 644 sfp_a2_info ");
//!
//! // Change one byte; prefix, chunking and padding survive.
//! let edited = encode_envelope("414244", &decoded.format).unwrap();
//! assert_eq!(edited, "begin-base64 644 sfp_a2_info @QUJE@Q==\n");
//! ```

pub mod constants;
mod decode;
mod encode;
mod format;

pub use constants::{BEGIN_MARKER, DELIMITER, PAD};
pub use decode::{decode_envelope, decode_payload, parse_envelope};
pub use encode::{encode_envelope, rebuild_envelope};
pub use format::{DecodedEnvelope, EnvelopeFormat};

use thiserror::Error;

/// Errors produced by the envelope codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// No `@` delimiter anywhere in the text.
    #[error("envelope has no '@' delimiter")]
    InvalidEnvelope,
    /// The canonical payload is not valid standard Base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    /// The buffer handed to the encoder is not hex.
    #[error("invalid hex buffer: {0}")]
    InvalidHex(String),
}
