// mfrc522-rs/libmfrc522/src/utils/hex.rs
//! Hex formatting for UIDs, keys and block dumps.

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex digits, ignoring whitespace and `:` separators
/// (`"FF:FF:FF"`, `"ff ff ff"` and `"ffffff"` are equivalent).
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{}'", s));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let text = String::from_utf8_lossy(pair);
            // from_str_radix alone would take a sign
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(format!("invalid hex byte '{}'", text));
            }
            u8::from_str_radix(&text, 16).map_err(|_| format!("invalid hex byte '{}'", text))
        })
        .collect()
}

/// Parse exactly `N` bytes of hex.
pub fn parse_hex_array<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let bytes = parse_hex(s)?;
    <[u8; N]>::try_from(bytes.as_slice())
        .map_err(|_| format!("expected {} bytes, got {}", N, bytes.len()))
}
