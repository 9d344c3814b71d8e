//! Windows-1252 round trip.
//!
//! Cleaned text goes through cp1252 before being written,
//! characters that cp1252 can't hold become `?`.
use encoding_rs::WINDOWS_1252;

/// Bytes that cp1252 leaves undefined.
/// `encoding_rs` maps them to C1 controls, but they are not part of the code page.
const UNDEFINED: [char; 5] = ['\u{81}', '\u{8D}', '\u{8F}', '\u{90}', '\u{9D}'];

/// Encode a single character, [None] if cp1252 can't represent it.
fn encode_char(ch: char) -> Option<u8> {
    if ch.is_ascii() {
        return Some(ch as u8);
    }
    if UNDEFINED.contains(&ch) {
        return None;
    }
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
    match (had_errors, &*bytes) {
        (false, [byte]) => Some(*byte),
        _ => None,
    }
}

/// Encode `text` to cp1252 replacing unencodable characters with `?`, then decode it back.
pub fn reencode_cp1252(text: &str) -> String {
    let bytes: Vec<u8> = text
        .chars()
        .map(|ch| encode_char(ch).unwrap_or(b'?'))
        .collect();
    let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);
    decoded.into_owned()
}
