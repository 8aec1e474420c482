//! Hexadecimal helpers for key material and tag identifiers.
//!
//! Scripts hand key material over as text, and tag identifiers come back to
//! scripts as text, so both directions live here.

/// Convert a byte slice to an upper-case hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to an upper-case hex string with a single space
/// between each byte, the way tag UIDs are printed.
///
/// Example: `&[0x04, 0xa1]` -> `"04 A1"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace between digits is ignored. Returns an error message
/// string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let hi = hex_digit(pair[0])?;
            let lo = hex_digit(pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn hex_digit(c: u8) -> Result<u8, String> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(format!("invalid hex digit '{}'", c as char)),
    }
}
