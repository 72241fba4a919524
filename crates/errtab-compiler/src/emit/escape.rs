//! C string literal escaping.

/// Escape bytes for use inside a C string literal.
///
/// Printable ASCII passes through except `"`, `\` and a `?` following
/// another `?` (trigraphs). Everything else becomes a three-digit octal
/// escape, which can never absorb a following digit.
pub fn escape_c_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut prev = None;
    for &b in bytes {
        match b {
            b'?' if prev == Some(b'?') => out.push_str("\\?"),
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\{b:03o}")),
        }
        prev = Some(b);
    }
    out
}
