//! Recursive-descent decoder: turns a scanned line stream into a [`Value`]
//! tree, selecting among inline-primitive, tabular, list-array, and object
//! decoding from syntactic cues alone. The cursor only ever moves forward.

use crate::parser::{
    parse_array_header_line, parse_delimited_values, parse_key_token, parse_primitive_token,
    ArrayHeaderInfo,
};
use crate::scanner::{scan_lines, LineCursor, ParsedLine};
use crate::text::find_closing_quote;
use crate::{DecodeOptions, Delimiter, Error, Result, ToonMap, Value};

/// Decodes TOON text into a value tree.
///
/// Empty or blank-only input is an error; so is any strict-mode or grammar
/// violation. See [`DecodeOptions`] for the strictness knobs.
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    let scan = scan_lines(input, options.indent, options.strict)?;
    if scan.lines.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut cursor = LineCursor::new(scan);
    decode_value(&mut cursor, options)
}

fn decode_value(cursor: &mut LineCursor<'_>, options: &DecodeOptions) -> Result<Value> {
    let first = cursor.peek().ok_or(Error::EmptyInput)?;

    // A bare header (no key) makes the whole document an array. A keyed
    // header is an object member and falls through to object decoding.
    if first.content.contains('[') {
        if let Some((header, inline)) = parse_array_header_line(first.content, Delimiter::default())?
        {
            if header.key.is_none() {
                cursor.advance();
                return decode_array_from_header(&header, inline, cursor, 0, options);
            }
        }
    }

    // A lone line that is not a key-value pair is a root scalar.
    if cursor.len() == 1 && !is_key_value_line(first) {
        return parse_primitive_token(first.content.trim());
    }

    decode_object(cursor, 0, options).map(Value::Object)
}

fn is_key_value_line(line: ParsedLine<'_>) -> bool {
    let content = line.content;
    if content.starts_with('"') {
        match find_closing_quote(content, 0) {
            Some(closing) => content.as_bytes().get(closing + 1) == Some(&b':'),
            None => false,
        }
    } else {
        content.contains(':')
    }
}

fn decode_object(
    cursor: &mut LineCursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<ToonMap> {
    let mut obj = ToonMap::new();

    while let Some(line) = cursor.peek() {
        if line.depth < base_depth {
            break;
        }
        if line.depth > base_depth {
            return Err(Error::UnexpectedIndentation {
                line: line.line_number,
            });
        }
        cursor.advance();
        let (key, value) = decode_key_value(line.content, cursor, base_depth, options)?;
        obj.insert(key, value);
    }

    Ok(obj)
}

/// Decodes one `key: ...` line. The header line itself is already consumed;
/// block content (nested objects, array rows, list items) is consumed from
/// the cursor as needed.
fn decode_key_value(
    content: &str,
    cursor: &mut LineCursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<(String, Value)> {
    if let Some((header, inline)) = parse_array_header_line(content, Delimiter::default())? {
        if let Some(key) = header.key.clone() {
            let value = decode_array_from_header(&header, inline, cursor, base_depth, options)?;
            return Ok((key, value));
        }
    }

    let (key, end) = parse_key_token(content, 0)?;
    let rest = content[end..].trim();

    // Nothing after the colon: a nested object follows, or the value is an
    // empty object.
    if rest.is_empty() {
        if let Some(next_line) = cursor.peek() {
            if next_line.depth > base_depth {
                let nested = decode_object(cursor, base_depth + 1, options)?;
                return Ok((key, Value::Object(nested)));
            }
        }
        return Ok((key, Value::Object(ToonMap::new())));
    }

    let value = parse_primitive_token(rest)?;
    Ok((key, value))
}

/// Dispatches to exactly one of the three array encodings, chosen purely
/// from the header and inline-segment shape.
fn decode_array_from_header(
    header: &ArrayHeaderInfo,
    inline: Option<&str>,
    cursor: &mut LineCursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    if let Some(inline) = inline {
        return decode_inline_primitive_array(header, inline, options).map(Value::Array);
    }

    if header.fields.as_ref().is_some_and(|fields| !fields.is_empty()) {
        return decode_tabular_array(header, cursor, base_depth, options).map(Value::Array);
    }

    decode_list_array(header, cursor, base_depth, options).map(Value::Array)
}

fn decode_inline_primitive_array(
    header: &ArrayHeaderInfo,
    inline: &str,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    if inline.trim().is_empty() {
        if options.strict && header.length != 0 {
            return Err(Error::LengthMismatch {
                what: "inline array items",
                expected: header.length,
                found: 0,
            });
        }
        return Ok(Vec::new());
    }

    let values = parse_delimited_values(inline, header.delimiter)?;
    let primitives = values
        .iter()
        .map(|value| parse_primitive_token(value))
        .collect::<Result<Vec<_>>>()?;

    if options.strict && primitives.len() != header.length {
        return Err(Error::LengthMismatch {
            what: "inline array items",
            expected: header.length,
            found: primitives.len(),
        });
    }

    Ok(primitives)
}

fn decode_list_array(
    header: &ArrayHeaderInfo,
    cursor: &mut LineCursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    let mut items = Vec::new();
    let item_depth = base_depth + 1;

    while items.len() < header.length {
        let Some(line) = cursor.peek() else {
            break;
        };
        if line.depth == item_depth && line.content.starts_with("- ") {
            items.push(decode_list_item(cursor, item_depth, header.delimiter, options)?);
        } else {
            break;
        }
    }

    if options.strict && items.len() != header.length {
        return Err(Error::LengthMismatch {
            what: "list array items",
            expected: header.length,
            found: items.len(),
        });
    }

    Ok(items)
}

/// Decodes one `- ` item: a nested array, a multi-field record written
/// starting on the dash line, or a bare primitive.
fn decode_list_item(
    cursor: &mut LineCursor<'_>,
    item_depth: usize,
    delimiter: Delimiter,
    options: &DecodeOptions,
) -> Result<Value> {
    let line = cursor
        .next()
        .ok_or_else(|| Error::syntax("expected list item"))?;
    let content = line.content["- ".len()..].trim();

    if let Some((header, inline)) = parse_array_header_line(content, delimiter)? {
        match header.key.clone() {
            // `- [2]: a,b` is a nested array item.
            None => return decode_array_from_header(&header, inline, cursor, item_depth, options),
            // `- tags[2]: a,b` is a record whose first field is an array.
            Some(key) => {
                let value =
                    decode_array_from_header(&header, inline, cursor, item_depth, options)?;
                let mut obj = ToonMap::new();
                obj.insert(key, value);
                decode_record_fields(&mut obj, cursor, item_depth, options)?;
                return Ok(Value::Object(obj));
            }
        }
    }

    if content.contains(':') {
        let (key, value) = decode_key_value(content, cursor, item_depth, options)?;
        let mut obj = ToonMap::new();
        obj.insert(key, value);
        decode_record_fields(&mut obj, cursor, item_depth, options)?;
        return Ok(Value::Object(obj));
    }

    parse_primitive_token(content)
}

/// Consumes the remaining `key: value` lines of a record that started on a
/// dash line. Fields sit one level deeper than the dash.
fn decode_record_fields(
    obj: &mut ToonMap,
    cursor: &mut LineCursor<'_>,
    item_depth: usize,
    options: &DecodeOptions,
) -> Result<()> {
    let field_depth = item_depth + 1;
    while let Some(line) = cursor.peek() {
        if line.depth != field_depth {
            break;
        }
        cursor.advance();
        let (key, value) = decode_key_value(line.content, cursor, field_depth, options)?;
        obj.insert(key, value);
    }
    Ok(())
}

fn decode_tabular_array(
    header: &ArrayHeaderInfo,
    cursor: &mut LineCursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    let fields = header
        .fields
        .as_ref()
        .ok_or_else(|| Error::syntax("tabular array without field list"))?;
    let mut rows = Vec::new();
    let row_depth = base_depth + 1;

    while rows.len() < header.length {
        let Some(line) = cursor.peek() else {
            break;
        };
        if line.depth != row_depth {
            break;
        }
        cursor.advance();

        let values = parse_delimited_values(line.content, header.delimiter)?;
        if options.strict && values.len() != fields.len() {
            return Err(Error::LengthMismatch {
                what: "tabular row values",
                expected: fields.len(),
                found: values.len(),
            });
        }

        let mut row = ToonMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            let value = match values.get(i) {
                Some(raw) => parse_primitive_token(raw)?,
                None => Value::Null,
            };
            row.insert(field.clone(), value);
        }
        rows.push(Value::Object(row));
    }

    if options.strict && rows.len() != header.length {
        return Err(Error::LengthMismatch {
            what: "tabular rows",
            expected: header.length,
            found: rows.len(),
        });
    }

    Ok(rows)
}
