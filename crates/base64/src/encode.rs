//! Payload encoding and envelope reconstruction.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use tracing::debug;

use crate::constants::{DELIMITER, PAD};
use crate::format::EnvelopeFormat;
use crate::EnvelopeError;

/// Encodes a hex buffer and lays it out in the shape recorded by `format`.
///
/// The payload is written without `=` padding: a `=` inside the chunks would
/// end the payload region on the next decode.
///
/// # Example
///
/// ```
/// use sfp_base64::{decode_envelope, encode_envelope};
///
/// let text = "begin-base64 644 sfp_a2_info @QUJD@Q==\n";
/// let decoded = decode_envelope(text).unwrap();
/// assert_eq!(encode_envelope(&decoded.hex, &decoded.format).unwrap(), text);
/// ```
pub fn encode_envelope(hex: &str, format: &EnvelopeFormat) -> Result<String, EnvelopeError> {
    let bytes = hex::decode(hex.trim()).map_err(|err| EnvelopeError::InvalidHex(err.to_string()))?;
    let payload = STANDARD_NO_PAD.encode(bytes);
    Ok(rebuild_envelope(&payload, format))
}

/// Splits `payload` over the recorded chunk lengths.
///
/// Chunks are filled in order with `min(len, remaining)` characters; once the
/// payload runs out no further chunks are emitted. If the payload outlives
/// the recorded chunks, its `=` padding is dropped (the envelope keeps its
/// own in `trailing_padding`) and whatever remains becomes one final chunk.
pub fn rebuild_envelope(payload: &str, format: &EnvelopeFormat) -> String {
    let mut out = String::with_capacity(
        format.prefix.len()
            + payload.len()
            + format.chunk_lengths.len()
            + format.trailing_padding.len()
            + 2,
    );
    out.push_str(&format.prefix);
    out.push(DELIMITER);

    let mut rest = payload;
    for &len in &format.chunk_lengths {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(len.min(rest.len()));
        out.push_str(chunk);
        out.push(DELIMITER);
        rest = tail;
    }

    let excess = rest.trim_end_matches(PAD);
    if !excess.is_empty() {
        debug!(
            excess = excess.len(),
            capacity = format.capacity(),
            "payload longer than recorded chunks"
        );
        out.push_str(excess);
        out.push(DELIMITER);
    }

    out.push_str(&format.trailing_padding);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(prefix: &str, chunks: &[usize], padding: &str) -> EnvelopeFormat {
        EnvelopeFormat {
            prefix: prefix.to_string(),
            chunk_lengths: chunks.to_vec(),
            trailing_padding: padding.to_string(),
        }
    }

    #[test]
    fn shorter_payload_yields_fewer_chunks() {
        let f = format("p", &[4, 4, 4], "==");
        assert_eq!(rebuild_envelope("QUJDRA", &f), "p@QUJD@RA@==");
    }

    #[test]
    fn longer_payload_appends_one_chunk() {
        let f = format("p", &[4], "");
        assert_eq!(rebuild_envelope("QUJDREVG", &f), "p@QUJD@REVG@");
    }

    #[test]
    fn overflowing_padding_is_dropped() {
        let f = format("p", &[2], "==\n");
        assert_eq!(rebuild_envelope("QQ==", &f), "p@QQ@==\n");
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(matches!(
            encode_envelope("ABC", &EnvelopeFormat::default()),
            Err(EnvelopeError::InvalidHex(_))
        ));
        assert!(matches!(
            encode_envelope("GG", &EnvelopeFormat::default()),
            Err(EnvelopeError::InvalidHex(_))
        ));
    }

    #[test]
    fn payload_carries_no_padding() {
        let f = format("p", &[4, 4], "====\n");
        assert_eq!(encode_envelope("41424344", &f).unwrap(), "p@QUJD@RA@====\n");
    }

    #[test]
    fn hex_is_trimmed_and_case_insensitive() {
        let f = format("", &[4], "");
        assert_eq!(encode_envelope(" 414243\n", &f).unwrap(), "@QUJD@");
        assert_eq!(encode_envelope("616263", &f).unwrap(), "@YWJj@");
    }
}
