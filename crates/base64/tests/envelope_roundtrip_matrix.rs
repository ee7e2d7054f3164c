//! Envelope decode/encode matrix and round-trip properties.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;
use proptest::prelude::*;
use sfp_base64::{decode_envelope, encode_envelope, parse_envelope, EnvelopeError, EnvelopeFormat};

// ---------------------------------------------------------------------------
// Fixed envelopes
// ---------------------------------------------------------------------------

#[test]
fn a2_sample_decodes_and_reencodes() {
    let text = "begin-base64 644 sfp_a2_info @QUJD@Q==\n";
    let decoded = decode_envelope(text).unwrap();
    assert_eq!(
        decoded.format,
        EnvelopeFormat {
            prefix: "begin-base64 644 sfp_a2_info ".to_string(),
            chunk_lengths: vec![4],
            trailing_padding: "Q==\n".to_string(),
        }
    );
    assert_eq!(decoded.hex, "414243");
    assert_eq!(encode_envelope(&decoded.hex, &decoded.format).unwrap(), text);
}

#[test]
fn multi_chunk_envelope_roundtrips() {
    let bytes: Vec<u8> = (0u8..=95).collect();
    let payload = STANDARD.encode(&bytes);
    assert!(!payload.contains('='));
    let text = format!(
        "begin-base64 644 sfp_a0_low_128\n@{}@{}@{}@====\n",
        &payload[..40],
        &payload[40..80],
        &payload[80..]
    );
    let decoded = decode_envelope(&text).unwrap();
    assert_eq!(decoded.format.chunk_lengths, vec![40, 40, payload.len() - 80]);
    assert_eq!(decoded.format.trailing_padding, "====\n");
    assert_eq!(hex::decode(&decoded.hex).unwrap(), bytes);
    assert_eq!(encode_envelope(&decoded.hex, &decoded.format).unwrap(), text);
}

#[test]
fn same_length_edit_only_touches_payload() {
    let text = "hdr @AAAA@AAAA@==";
    let decoded = decode_envelope(text).unwrap();
    assert_eq!(decoded.hex, "000000000000");
    let edited = encode_envelope("FFFFFF000000", &decoded.format).unwrap();
    assert_eq!(edited, "hdr @////@AAAA@==");
}

#[test]
fn error_matrix() {
    assert_eq!(
        decode_envelope("begin-base64 644 sfp_a2_info QUJD"),
        Err(EnvelopeError::InvalidEnvelope)
    );
    assert!(matches!(
        decode_envelope("x@QU!D@"),
        Err(EnvelopeError::InvalidBase64(_))
    ));
    assert!(matches!(
        decode_envelope("x@QUJ D@"),
        Err(EnvelopeError::InvalidBase64(_))
    ));
}

#[test]
fn surrounding_whitespace_is_trimmed_from_payload() {
    let (canonical, _) = parse_envelope("x@ QUJD\n@").unwrap();
    assert_eq!(canonical, "QUJD");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn split_by_sizes(payload: &str, sizes: &[usize]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    let mut i = 0;
    while !rest.is_empty() {
        let take = sizes[i % sizes.len()].min(rest.len());
        let (chunk, tail) = rest.split_at(take);
        chunks.push(chunk.to_string());
        rest = tail;
        i += 1;
    }
    chunks
}

fn envelope_parts() -> impl Strategy<Value = (String, Vec<u8>, Vec<usize>, String)> {
    (
        "[a-z0-9 _-]{0,24}\n?",
        prop::collection::vec(any::<u8>(), 1..300),
        prop::collection::vec(1usize..40, 1..8),
        prop_oneof![
            Just(String::new()),
            "[A-Za-z0-9+/]{0,3}=[=\n@a-z]{0,6}",
        ],
    )
}

fn assemble(prefix: &str, chunks: &[String], padding: &str) -> String {
    let mut text = String::from(prefix);
    text.push('@');
    for chunk in chunks {
        text.push_str(chunk);
        text.push('@');
    }
    text.push_str(padding);
    text
}

proptest! {
    #[test]
    fn decode_then_encode_reproduces_text(
        (prefix, bytes, sizes, padding) in envelope_parts()
    ) {
        let payload = STANDARD_NO_PAD.encode(&bytes);
        let chunks = split_by_sizes(&payload, &sizes);
        let text = assemble(&prefix, &chunks, &padding);

        let decoded = decode_envelope(&text).unwrap();
        prop_assert_eq!(hex::decode(&decoded.hex).unwrap(), bytes);
        prop_assert_eq!(&decoded.format.prefix, &prefix);
        prop_assert_eq!(
            decoded.format.chunk_lengths.clone(),
            chunks.iter().map(String::len).collect::<Vec<_>>()
        );
        prop_assert_eq!(encode_envelope(&decoded.hex, &decoded.format).unwrap(), text);
    }

    #[test]
    fn edited_payload_keeps_shape(
        (prefix, bytes, sizes, padding) in envelope_parts(),
        flip in any::<u8>(),
    ) {
        let payload = STANDARD_NO_PAD.encode(&bytes);
        let chunks = split_by_sizes(&payload, &sizes);
        let text = assemble(&prefix, &chunks, &padding);
        let decoded = decode_envelope(&text).unwrap();

        let mut edited = bytes.clone();
        edited[0] ^= flip;
        let reencoded = encode_envelope(&hex::encode(&edited), &decoded.format).unwrap();
        let again = decode_envelope(&reencoded).unwrap();
        prop_assert_eq!(again.format, decoded.format);
        prop_assert_eq!(hex::decode(&again.hex).unwrap(), edited);
    }
}
