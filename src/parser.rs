//! Header and token parsing: the array-header grammar
//! (`key? [ #? length delim? ] {field,...}? :`), quote-aware value
//! splitting, and classification of scalar tokens.

use crate::text::{find_closing_quote, find_unquoted_char, is_numeric_literal, unescape};
use crate::{Delimiter, Error, Number, Result, Value};

/// A parsed array header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayHeaderInfo {
    /// Key before the bracket segment, verbatim. `None` for a bare header.
    pub key: Option<String>,
    /// Declared item count.
    pub length: usize,
    /// Active delimiter for this array: the default unless the bracket
    /// segment carries an override suffix.
    pub delimiter: Delimiter,
    /// Field names between `{` and `}` (tabular mode).
    pub fields: Option<Vec<String>>,
    /// Whether the length was written with a `#` prefix. Echoed by the
    /// encoder, no further meaning.
    pub has_length_marker: bool,
}

/// Tries to read `content` as an array header line.
///
/// Returns `Ok(None)` when the line is not array syntax at all: it starts
/// with a quote (a quoted key can never open a header), has no bracket
/// pair, has no terminating colon, or its bracket segment does not hold a
/// valid non-negative length. Malformed quoting inside a field list is a
/// hard error.
///
/// On success, the second element is the trimmed inline segment after the
/// terminating colon, or `None` when the array's content follows as
/// indented block lines.
pub fn parse_array_header_line<'a>(
    content: &'a str,
    default_delimiter: Delimiter,
) -> Result<Option<(ArrayHeaderInfo, Option<&'a str>)>> {
    if content.trim_start().starts_with('"') {
        return Ok(None);
    }

    let Some(bracket_start) = content.find('[') else {
        return Ok(None);
    };
    let Some(bracket_end) = content[bracket_start..].find(']').map(|i| i + bracket_start) else {
        return Ok(None);
    };

    // A field-list segment only counts when its brace opens between the
    // closing bracket and the header's terminating colon.
    let brace_start = content[bracket_end..].find('{').map(|i| i + bracket_end);
    let mut brace_end = bracket_end + 1;
    if let Some(brace_start) = brace_start {
        let colon_pos = content[bracket_end..].find(':').map(|i| i + bracket_end);
        if colon_pos.is_none() || colon_pos.is_some_and(|colon| brace_start < colon) {
            if let Some(found) = content[brace_start..].find('}').map(|i| i + brace_start) {
                brace_end = found + 1;
            }
        }
    }

    let search_from = bracket_end.max(brace_end);
    let Some(colon_index) = content[search_from..].find(':').map(|i| i + search_from) else {
        return Ok(None);
    };

    let key = if bracket_start > 0 {
        Some(content[..bracket_start].to_string())
    } else {
        None
    };
    let after_colon = content[colon_index + 1..].trim();

    let bracket_content = &content[bracket_start + 1..bracket_end];
    let Some((length, delimiter, has_length_marker)) =
        parse_bracket_segment(bracket_content, default_delimiter)
    else {
        return Ok(None);
    };

    let mut fields = None;
    if let Some(brace_start) = brace_start {
        if brace_start < colon_index {
            if let Some(found_end) = content[brace_start..].find('}').map(|i| i + brace_start) {
                if found_end < colon_index {
                    let fields_content = &content[brace_start + 1..found_end];
                    let parsed = parse_delimited_values(fields_content, delimiter)?
                        .iter()
                        .map(|field| parse_string_literal(field.trim()))
                        .collect::<Result<Vec<_>>>()?;
                    fields = Some(parsed);
                }
            }
        }
    }

    let header = ArrayHeaderInfo {
        key,
        length,
        delimiter,
        fields,
        has_length_marker,
    };
    let inline = if after_colon.is_empty() {
        None
    } else {
        Some(after_colon)
    };
    Ok(Some((header, inline)))
}

/// Reads the bracket segment: an optional `#` marker, a non-negative
/// length, and an optional trailing delimiter override. Any parse failure
/// disqualifies the whole line as a header.
fn parse_bracket_segment(segment: &str, default: Delimiter) -> Option<(usize, Delimiter, bool)> {
    let mut content = segment;

    let has_length_marker = if let Some(rest) = content.strip_prefix('#') {
        content = rest;
        true
    } else {
        false
    };

    let mut delimiter = default;
    if let Some(rest) = content.strip_suffix('\t') {
        delimiter = Delimiter::Tab;
        content = rest;
    } else if let Some(rest) = content.strip_suffix('|') {
        delimiter = Delimiter::Pipe;
        content = rest;
    } else if let Some(rest) = content.strip_suffix(',') {
        delimiter = Delimiter::Comma;
        content = rest;
    }

    let length = content.parse::<usize>().ok()?;
    Some((length, delimiter, has_length_marker))
}

/// Splits `content` on the delimiter in a single left-to-right pass. A
/// quoted span is copied verbatim, escapes included, so a delimiter inside
/// quotes never splits. Adjacent delimiters yield empty fields; an
/// unclosed quote is a hard error.
pub fn parse_delimited_values(content: &str, delimiter: Delimiter) -> Result<Vec<String>> {
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let delim = delimiter.as_char();
    let mut values = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < content.len() {
        let ch = content[i..].chars().next().expect("in-bounds char");
        if ch == '"' {
            let closing = find_closing_quote(content, i)
                .ok_or_else(|| Error::syntax("unclosed quote in delimited values"))?;
            current.push_str(&content[i..closing + 1]);
            i = closing + 1;
        } else if ch == delim {
            values.push(std::mem::take(&mut current));
            i += ch.len_utf8();
        } else {
            current.push(ch);
            i += ch.len_utf8();
        }
    }

    values.push(current);
    Ok(values)
}

/// Reads a key token starting at byte offset `start` and returns the
/// decoded key together with the offset just past its colon.
///
/// A quoted key is unescaped and must be followed by a colon; a bare key
/// runs up to the first colon outside quotes and is trimmed.
pub fn parse_key_token(content: &str, start: usize) -> Result<(String, usize)> {
    if content[start..].starts_with('"') {
        let closing = find_closing_quote(content, start)
            .ok_or_else(|| Error::syntax("unclosed quote in key"))?;
        let key = unescape(&content[start + 1..closing])?;

        let mut end = closing + 1;
        while end < content.len() && content.as_bytes()[end] != b':' {
            end += 1;
        }
        if end >= content.len() {
            return Err(Error::syntax("no colon found after key"));
        }
        Ok((key, end + 1))
    } else {
        let colon = find_unquoted_char(content, ':', start)
            .ok_or_else(|| Error::syntax("no colon found in key-value pair"))?;
        let key = content[start..colon].trim().to_string();
        Ok((key, colon + 1))
    }
}

/// Classifies a scalar token as null, boolean, number, quoted string, or
/// bare string.
pub fn parse_primitive_token(value: &str) -> Result<Value> {
    let trimmed = value.trim();

    match trimmed {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if trimmed.starts_with('"') {
        return parse_string_literal(trimmed).map(Value::String);
    }

    if is_numeric_literal(trimmed) {
        return Ok(parse_numeric_value(trimmed));
    }

    Ok(Value::String(trimmed.to_string()))
}

/// Parses a numeric literal, preferring `i64` for integral shapes and
/// keeping the verbatim string when every numeric parse fails.
fn parse_numeric_value(value: &str) -> Value {
    let has_decimal_point = value.contains('.');
    let has_exponent = value.contains(['e', 'E']);

    if has_decimal_point || has_exponent {
        match value.parse::<f64>() {
            Ok(f) => Value::Number(Number::Float(f)),
            Err(_) => Value::String(value.to_string()),
        }
    } else if let Ok(i) = value.parse::<i64>() {
        Value::Number(Number::Integer(i))
    } else if let Ok(f) = value.parse::<f64>() {
        Value::Number(Number::Float(f))
    } else {
        Value::String(value.to_string())
    }
}

/// Decodes a string literal: a quoted token must be exactly one quoted
/// span and is unescaped; anything else is returned trimmed.
pub fn parse_string_literal(value: &str) -> Result<String> {
    let trimmed = value.trim();

    if !trimmed.starts_with('"') {
        return Ok(trimmed.to_string());
    }

    let closing = find_closing_quote(trimmed, 0)
        .ok_or_else(|| Error::syntax(format!("invalid quoted string: {value}")))?;
    if closing != trimmed.len() - 1 {
        return Err(Error::syntax(format!("invalid quoted string: {value}")));
    }

    unescape(&trimmed[1..closing])
}
