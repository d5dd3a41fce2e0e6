//! Encoder: walks a [`Value`] tree and greedily picks the most compact
//! representation per array — header-only, inline, tabular, then list —
//! emitting lines through an append-only [`LineWriter`].

use crate::text::{escape, is_safe_unquoted, is_valid_unquoted_key};
use crate::{Delimiter, EncodeOptions, Number, ToonMap, Value};

/// An append-only accumulator of indented lines.
#[derive(Debug)]
pub struct LineWriter {
    lines: Vec<String>,
    indent_unit: usize,
}

impl LineWriter {
    /// Creates a writer with the given indentation unit.
    #[must_use]
    pub fn new(indent_unit: usize) -> Self {
        LineWriter {
            lines: Vec::new(),
            indent_unit,
        }
    }

    /// Appends a line at the given depth.
    pub fn push(&mut self, depth: usize, content: &str) {
        let mut line = " ".repeat(depth * self.indent_unit);
        line.push_str(content);
        self.lines.push(line);
    }

    /// Appends a `- `-prefixed list-item line at the given depth.
    pub fn push_list_item(&mut self, depth: usize, content: &str) {
        let mut line = " ".repeat(depth * self.indent_unit);
        line.push_str("- ");
        line.push_str(content);
        self.lines.push(line);
    }

    /// Joins all lines into the final output.
    #[must_use]
    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

/// Encodes a value tree as TOON text.
///
/// A root scalar renders directly with no header; root arrays and objects
/// render through the line writer starting at depth 0. The closed [`Value`]
/// union makes this total: every representable tree encodes.
#[must_use]
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            encode_primitive(value, options.delimiter)
        }
        Value::Array(items) => {
            let mut writer = LineWriter::new(options.indent);
            encode_array(None, items, &mut writer, 0, options);
            writer.into_string()
        }
        Value::Object(obj) => {
            let mut writer = LineWriter::new(options.indent);
            encode_object(obj, &mut writer, 0, options);
            writer.into_string()
        }
    }
}

fn encode_object(obj: &ToonMap, writer: &mut LineWriter, depth: usize, options: &EncodeOptions) {
    for (key, value) in obj.iter() {
        encode_key_value_pair(key, value, writer, depth, options);
    }
}

fn encode_key_value_pair(
    key: &str,
    value: &Value,
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    let encoded_key = encode_key(key);

    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let primitive = encode_primitive(value, options.delimiter);
            writer.push(depth, &format!("{encoded_key}: {primitive}"));
        }
        Value::Array(items) => {
            encode_array(Some(key), items, writer, depth, options);
        }
        Value::Object(nested) => {
            writer.push(depth, &format!("{encoded_key}:"));
            if !nested.is_empty() {
                encode_object(nested, writer, depth + 1, options);
            }
        }
    }
}

/// Representation precedence: empty header, inline scalars, tabular rows,
/// and finally the general list format.
fn encode_array(
    key: Option<&str>,
    array: &[Value],
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    if array.is_empty() {
        let header = format_header(0, key, None, options.delimiter, options.length_marker);
        writer.push(depth, &header);
        return;
    }

    if is_array_of_primitives(array) {
        let line = encode_inline_array_line(array, options.delimiter, key, options.length_marker);
        writer.push(depth, &line);
        return;
    }

    if is_array_of_objects(array) {
        if let Some(fields) = extract_tabular_fields(array) {
            encode_tabular_rows(key, array, &fields, writer, depth, options);
            return;
        }
    }

    encode_list_items(key, array, writer, depth, options);
}

fn is_array_of_primitives(array: &[Value]) -> bool {
    array.iter().all(Value::is_primitive)
}

fn is_array_of_objects(array: &[Value]) -> bool {
    array.iter().all(Value::is_object)
}

/// Field list for the tabular representation: the first record's keys, in
/// order, provided every record carries exactly that key set and every
/// value under every key is a scalar.
fn extract_tabular_fields(array: &[Value]) -> Option<Vec<String>> {
    let Some(Value::Object(first)) = array.first() else {
        return None;
    };
    let fields: Vec<String> = first.keys().cloned().collect();

    for item in array {
        let Value::Object(obj) = item else {
            return None;
        };
        if obj.len() != fields.len() {
            return None;
        }
        for field in &fields {
            match obj.get(field) {
                Some(value) if value.is_primitive() => {}
                _ => return None,
            }
        }
    }

    Some(fields)
}

fn encode_inline_array_line(
    values: &[Value],
    delimiter: Delimiter,
    key: Option<&str>,
    length_marker: bool,
) -> String {
    let header = format_header(values.len(), key, None, delimiter, length_marker);
    if values.is_empty() {
        return header;
    }
    let joined = encode_and_join_primitives(values, delimiter);
    format!("{header} {joined}")
}

fn encode_tabular_rows(
    key: Option<&str>,
    rows: &[Value],
    fields: &[String],
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    let header = format_header(
        rows.len(),
        key,
        Some(fields),
        options.delimiter,
        options.length_marker,
    );
    writer.push(depth, &header);

    for row in rows {
        let Value::Object(obj) = row else {
            continue;
        };
        let values: Vec<Value> = fields
            .iter()
            .map(|field| obj.get(field).cloned().unwrap_or(Value::Null))
            .collect();
        let encoded = encode_and_join_primitives(&values, options.delimiter);
        writer.push(depth + 1, &encoded);
    }
}

fn encode_list_items(
    key: Option<&str>,
    values: &[Value],
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    let header = format_header(
        values.len(),
        key,
        None,
        options.delimiter,
        options.length_marker,
    );
    writer.push(depth, &header);

    for value in values {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                writer.push_list_item(depth + 1, &encode_primitive(value, options.delimiter));
            }
            Value::Array(items) => {
                if is_array_of_primitives(items) {
                    let inline = encode_inline_array_line(
                        items,
                        options.delimiter,
                        None,
                        options.length_marker,
                    );
                    writer.push_list_item(depth + 1, &inline);
                } else {
                    writer.push_list_item(depth + 1, "");
                    encode_array(None, items, writer, depth + 1, options);
                }
            }
            Value::Object(obj) => {
                encode_object_as_list_item(obj, writer, depth + 1, options);
            }
        }
    }
}

/// Writes a record as a list item: the first key/value pair goes directly
/// after the dash, the remaining keys continue as ordinary object lines
/// one level deeper.
fn encode_object_as_list_item(
    obj: &ToonMap,
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    let mut entries = obj.iter();
    let Some((first_key, first_value)) = entries.next() else {
        return;
    };
    let encoded_key = encode_key(first_key);

    match first_value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let primitive = encode_primitive(first_value, options.delimiter);
            writer.push_list_item(depth, &format!("{encoded_key}: {primitive}"));
        }
        Value::Array(items) => {
            if items.is_empty() {
                let header =
                    format_header(0, None, None, options.delimiter, options.length_marker);
                writer.push_list_item(depth, &format!("{encoded_key}{header}"));
            } else if is_array_of_primitives(items) {
                let inline =
                    encode_inline_array_line(items, options.delimiter, None, options.length_marker);
                writer.push_list_item(depth, &format!("{encoded_key}{inline}"));
            } else if is_array_of_objects(items) {
                match extract_tabular_fields(items) {
                    Some(fields) => {
                        let header = format_header(
                            items.len(),
                            None,
                            Some(&fields),
                            options.delimiter,
                            options.length_marker,
                        );
                        writer.push_list_item(depth, &format!("{encoded_key}{header}"));
                        for row in items {
                            let Value::Object(row_obj) = row else {
                                continue;
                            };
                            let values: Vec<Value> = fields
                                .iter()
                                .map(|field| row_obj.get(field).cloned().unwrap_or(Value::Null))
                                .collect();
                            let encoded = encode_and_join_primitives(&values, options.delimiter);
                            writer.push(depth + 1, &encoded);
                        }
                    }
                    None => {
                        writer.push_list_item(depth, &format!("{encoded_key}:"));
                        encode_list_items(None, items, writer, depth + 1, options);
                    }
                }
            } else {
                writer.push_list_item(depth, &format!("{encoded_key}:"));
                encode_list_items(None, items, writer, depth + 1, options);
            }
        }
        Value::Object(nested) => {
            writer.push_list_item(depth, &format!("{encoded_key}:"));
            encode_object(nested, writer, depth + 1, options);
        }
    }

    for (key, value) in entries {
        encode_key_value_pair(key, value, writer, depth + 1, options);
    }
}

/// Renders a scalar value. Containers never reach this function; every
/// call site gates on [`Value::is_primitive`] or matches scalar variants.
pub(crate) fn encode_primitive(value: &Value, delimiter: Delimiter) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => encode_string_literal(s, delimiter),
        Value::Array(_) | Value::Object(_) => unreachable!("containers are encoded structurally"),
    }
}

/// Floats with an exact integral value print with no decimal point; such
/// values decode back as integers, a deliberate lossy normalization.
fn format_number(number: Number) -> String {
    match number {
        Number::Integer(i) => i.to_string(),
        Number::Float(f) => {
            if f.is_finite() && f == (f as i64) as f64 {
                (f as i64).to_string()
            } else {
                f.to_string()
            }
        }
    }
}

fn encode_string_literal(value: &str, delimiter: Delimiter) -> String {
    if is_safe_unquoted(value, delimiter) {
        value.to_string()
    } else {
        format!("\"{}\"", escape(value))
    }
}

fn encode_key(key: &str) -> String {
    if is_valid_unquoted_key(key) {
        key.to_string()
    } else {
        format!("\"{}\"", escape(key))
    }
}

fn encode_and_join_primitives(values: &[Value], delimiter: Delimiter) -> String {
    values
        .iter()
        .map(|value| encode_primitive(value, delimiter))
        .collect::<Vec<_>>()
        .join(delimiter.as_str())
}

/// Formats an array header:
/// `key?` `[` `#`? length delimiter-char? `]` `{field...}`? `:`.
/// The delimiter character appears only when it differs from the comma
/// default; field names are quoted like keys.
pub(crate) fn format_header(
    length: usize,
    key: Option<&str>,
    fields: Option<&[String]>,
    delimiter: Delimiter,
    length_marker: bool,
) -> String {
    let mut header = String::new();

    if let Some(key) = key {
        header.push_str(&encode_key(key));
    }

    header.push('[');
    if length_marker {
        header.push('#');
    }
    header.push_str(&length.to_string());
    if delimiter != Delimiter::Comma {
        header.push(delimiter.as_char());
    }
    header.push(']');

    if let Some(fields) = fields {
        let quoted = fields
            .iter()
            .map(|field| encode_key(field))
            .collect::<Vec<_>>()
            .join(delimiter.as_str());
        header.push('{');
        header.push_str(&quoted);
        header.push('}');
    }

    header.push(':');
    header
}
