//! Non-payload shape of an envelope.

/// Everything about an envelope's text needed to rebuild it around a new
/// payload.
///
/// Layout: `prefix`, `@`, then one chunk per entry of `chunk_lengths`, each
/// followed by `@`, then `trailing_padding` verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvelopeFormat {
    /// Text before the first delimiter, e.g. `"begin-base64 644 sfp_a2_info "`.
    pub prefix: String,
    /// Lengths of the non-empty delimiter-separated payload segments, in order.
    pub chunk_lengths: Vec<usize>,
    /// Literal text after the last payload delimiter (end markers, `=` runs).
    pub trailing_padding: String,
}

impl EnvelopeFormat {
    /// Total payload characters the recorded chunks can hold.
    pub fn capacity(&self) -> usize {
        self.chunk_lengths.iter().sum()
    }
}

/// Result of decoding an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEnvelope {
    /// Decoded payload as uppercase hex text.
    pub hex: String,
    pub format: EnvelopeFormat,
}
