/// Separates Base64 chunks inside an envelope.
pub const DELIMITER: char = '@';

/// Base64 padding character; its first occurrence ends the payload region.
pub const PAD: char = '=';

/// Header marker carried by every exported envelope.
pub const BEGIN_MARKER: &str = "begin-base64";

/// Canonical Base64 characters decoded per step. Multiple of 4 so that every
/// step but the last holds whole quanta.
pub const DECODE_CHUNK_SIZE: usize = 4096;
