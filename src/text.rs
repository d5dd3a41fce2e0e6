//! Character-level text utilities: escaping, quote-span scanning, and the
//! "is this token safe to leave unquoted" predicates used by the encoder.

use crate::{Delimiter, Error, Result};

/// Characters that force quoting of any bare token (key or value).
const STRUCTURAL_CHARS: [char; 10] = ['"', ':', '\n', '\r', '\t', '\\', '[', ']', '{', '}'];

/// Escapes backslash, double quote, newline, carriage return, and tab.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 10);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape`], rejecting unknown escape sequences and a trailing
/// unmatched backslash.
pub fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(other) => return Err(Error::InvalidEscape(other)),
                None => return Err(Error::TrailingBackslash),
            }
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Finds the byte index of the closing double quote matching the opening
/// quote at `start`, skipping escaped characters. Returns `None` when the
/// span never closes.
#[must_use]
pub fn find_closing_quote(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b'"' => return Some(i),
            _ => {
                // Skip over the whole character, not just one byte.
                i += 1;
                while i < bytes.len() && (bytes[i] & 0xC0) == 0x80 {
                    i += 1;
                }
            }
        }
    }
    None
}

/// Finds the byte index of `target` outside any quoted span, starting at
/// `start`. Returns `None` if the character never appears unquoted, or if
/// a quoted span never closes.
#[must_use]
pub fn find_unquoted_char(s: &str, target: char, start: usize) -> Option<usize> {
    let mut i = start;
    while i < s.len() {
        let ch = s[i..].chars().next()?;
        if ch == '"' {
            let closing = find_closing_quote(s, i)?;
            i = closing + 1;
            continue;
        }
        if ch == target {
            return Some(i);
        }
        i += ch.len_utf8();
    }
    None
}

/// Returns `true` if the token is exactly `true`, `false`, or `null`.
#[must_use]
pub fn is_bool_or_null_literal(s: &str) -> bool {
    matches!(s, "true" | "false" | "null")
}

/// Returns `true` if the token has a numeric-literal shape: it starts with
/// a digit, sign, or dot and parses as a double. The first-character gate
/// keeps words like `Infinity` and `NaN` out of the numeric space.
#[must_use]
pub fn is_numeric_literal(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    if !(first.is_ascii_digit() || first == '-' || first == '+' || first == '.') {
        return false;
    }
    s.parse::<f64>().is_ok()
}

fn contains_structural_char(s: &str) -> bool {
    s.chars().any(|ch| STRUCTURAL_CHARS.contains(&ch))
}

/// Returns `true` if a scalar string can be written without quotes:
/// non-empty, no leading/trailing whitespace, not a reserved or numeric
/// literal, free of structural characters and the active delimiter, and
/// not starting like a list item or a length marker.
#[must_use]
pub fn is_safe_unquoted(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() || s.trim() != s {
        return false;
    }
    if is_bool_or_null_literal(s) || is_numeric_literal(s) {
        return false;
    }
    if contains_structural_char(s) || s.contains(delimiter.as_char()) {
        return false;
    }
    !s.starts_with("- ") && !s.starts_with('#')
}

/// Returns `true` if a key can be written without quotes. Keys follow the
/// same structural-character rules as scalar values but ignore the active
/// delimiter (a comma in a key is unambiguous).
#[must_use]
pub fn is_valid_unquoted_key(key: &str) -> bool {
    if key.is_empty() || key.trim() != key {
        return false;
    }
    if is_bool_or_null_literal(key) || is_numeric_literal(key) {
        return false;
    }
    !contains_structural_char(key) && !key.starts_with("- ")
}
