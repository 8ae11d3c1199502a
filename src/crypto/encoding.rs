//! Byte-level encodings for the card payload and its ciphertext.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Map each UTF-16 code unit of `s` to its low byte.
///
/// This is not UTF-8: ASCII survives, Latin-1 characters become their
/// single-byte code, anything above U+00FF is truncated. The gateway
/// decrypts with the same mapping, so the ciphertext depends on it.
pub fn to_code_unit_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().map(|unit| unit as u8).collect()
}

/// Standard base64 (`A-Z a-z 0-9 + /`) with `=` padding.
pub fn encode_ciphertext(ciphertext: &[u8]) -> String {
    STANDARD.encode(ciphertext)
}
