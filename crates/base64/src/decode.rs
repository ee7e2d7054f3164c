//! Envelope parsing and payload decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use tracing::debug;

use crate::constants::{DECODE_CHUNK_SIZE, DELIMITER, PAD};
use crate::format::{DecodedEnvelope, EnvelopeFormat};
use crate::EnvelopeError;

/// Standard alphabet; the payload never carries its own `=` padding because
/// the first `=` ends the payload region.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Splits an envelope into its canonical Base64 payload and its format.
///
/// The first `@` ends the prefix. In the rest, the first `=` marks the start
/// of the padding area: the payload region runs up to and including the last
/// `@` before that `=`, or up to the `=` itself when no `@` precedes it. With
/// no `=` at all, everything after the first `@` is payload.
///
/// # Example
///
/// ```
/// use sfp_base64::parse_envelope;
///
/// let (canonical, format) = parse_envelope("hdr @QUJD@Q==\n").unwrap();
/// assert_eq!(canonical, "QUJD");
/// assert_eq!(format.prefix, "hdr ");
/// assert_eq!(format.chunk_lengths, vec![4]);
/// assert_eq!(format.trailing_padding, "Q==\n");
/// ```
pub fn parse_envelope(input: &str) -> Result<(String, EnvelopeFormat), EnvelopeError> {
    let first_delimiter = input.find(DELIMITER).ok_or(EnvelopeError::InvalidEnvelope)?;
    let prefix = &input[..first_delimiter];
    let remaining = &input[first_delimiter + DELIMITER.len_utf8()..];

    let (payload, trailing) = match remaining.find(PAD) {
        Some(first_pad) => match remaining[..first_pad].rfind(DELIMITER) {
            Some(last_delimiter) => remaining.split_at(last_delimiter + DELIMITER.len_utf8()),
            None => remaining.split_at(first_pad),
        },
        None => (remaining, ""),
    };

    let chunks: Vec<&str> = payload
        .split(DELIMITER)
        .filter(|chunk| !chunk.is_empty())
        .collect();

    let joined: String = chunks
        .concat()
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect();
    let canonical = joined.trim().to_string();

    let format = EnvelopeFormat {
        prefix: prefix.to_string(),
        chunk_lengths: chunks.iter().map(|chunk| chunk.len()).collect(),
        trailing_padding: trailing.to_string(),
    };

    debug!(
        prefix_len = format.prefix.len(),
        chunks = format.chunk_lengths.len(),
        payload_len = canonical.len(),
        padding_len = format.trailing_padding.len(),
        "parsed envelope"
    );

    Ok((canonical, format))
}

/// Decodes canonical Base64 text in fixed-size steps.
///
/// The result equals decoding the whole string at once.
pub fn decode_payload(canonical: &str) -> Result<Vec<u8>, EnvelopeError> {
    let input = canonical.as_bytes();
    let mut out = Vec::with_capacity(input.len() / 4 * 3 + 3);
    for (step, chunk) in input.chunks(DECODE_CHUNK_SIZE).enumerate() {
        PAYLOAD_ENGINE.decode_vec(chunk, &mut out).map_err(|err| {
            EnvelopeError::InvalidBase64(format!(
                "{err} (in block starting at {})",
                step * DECODE_CHUNK_SIZE
            ))
        })?;
    }
    Ok(out)
}

/// Parses an envelope and decodes its payload to uppercase hex.
///
/// # Example
///
/// ```
/// use sfp_base64::decode_envelope;
///
/// let decoded = decode_envelope("begin-base64 644 sfp_a2_info @QUJD@Q==\n").unwrap();
/// assert_eq!(decoded.hex, "414243");
/// ```
pub fn decode_envelope(input: &str) -> Result<DecodedEnvelope, EnvelopeError> {
    let (canonical, format) = parse_envelope(input)?;
    let bytes = decode_payload(&canonical)?;
    debug!(bytes = bytes.len(), "decoded envelope payload");
    Ok(DecodedEnvelope {
        hex: hex::encode_upper(bytes),
        format,
    })
}
