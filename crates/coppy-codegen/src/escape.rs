//! String literal escaping for generated source.

use std::fmt::Write;

/// Escape `s` so it can be embedded between double quotes in Rust source.
///
/// # Examples
///
/// ```
/// use coppy_codegen::escape::escape_str;
///
/// assert_eq!(escape_str(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_str("a\nb"), r"a\nb");
/// ```
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                // Infallible for String
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }

    out
}

/// A complete string literal expression, quotes included.
pub fn string_literal(s: &str) -> String {
    format!("\"{}\"", escape_str(s))
}
