//! Bounded text helpers used wherever upstream text ends up in a response.

/// Longest excerpt of a provider error body carried in an error message.
pub const ERROR_EXCERPT_CHARS: usize = 200;
/// Longest dump of an uninterpretable provider response.
pub const DIAGNOSTIC_DUMP_CHARS: usize = 400;
/// Longest excerpt of an unexpected response body shown by the Studio.
pub const UNEXPECTED_EXCERPT_CHARS: usize = 160;

/// Return at most `max_chars` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Lossy UTF-8 decode of raw bytes followed by [`truncate_chars`].
pub fn excerpt(bytes: &[u8], max_chars: usize) -> String {
    let text = String::from_utf8_lossy(bytes);
    truncate_chars(&text, max_chars).to_string()
}

/// Leading characters of a secret that are safe to show in diagnostics.
pub fn secret_prefix(secret: &str) -> &str {
    truncate_chars(secret, 6)
}
