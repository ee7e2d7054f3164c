//! Debug rendering of raw bytes.

/// Formats bytes as space-separated uppercase hex, showing at most `max`.
///
/// # Example
///
/// ```
/// use sfp_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x03, 0x04, 0x0a, 0xff], 16), "03 04 0A FF");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = octets
        .iter()
        .take(max)
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ");

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Renders a classic offset-prefixed dump, `width` bytes per row.
///
/// ```
/// use sfp_buffers::hex_dump;
///
/// assert_eq!(hex_dump(&[1, 2, 3], 2), "0000: 01 02\n0002: 03\n");
/// ```
pub fn hex_dump(octets: &[u8], width: usize) -> String {
    let width = width.max(1);
    let mut out = String::new();
    for (row, chunk) in octets.chunks(width).enumerate() {
        out.push_str(&format!("{:04X}: ", row * width));
        out.push_str(&print_octets(chunk, width));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_octets_single() {
        assert_eq!(print_octets(&[0x01], 16), "01");
    }

    #[test]
    fn test_print_octets_truncated() {
        let data: Vec<u8> = (0..20).collect();
        let result = print_octets(&data, 10);
        assert!(result.ends_with("... (10 more)"));
    }

    #[test]
    fn test_hex_dump_offsets_are_hex() {
        let data: Vec<u8> = (0..17).collect();
        let dump = hex_dump(&data, 16);
        assert!(dump.starts_with("0000: 00 01"));
        assert!(dump.ends_with("0010: 10\n"));
    }
}
