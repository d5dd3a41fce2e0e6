//! Decoder behavior: root dispatch, the three array branches, strict-mode
//! validation, and error reporting.

use toon_codec::{decode, decode_with_options, toon, DecodeOptions, Error, Number, Value};

#[test]
fn root_scalar_documents() {
    assert_eq!(decode("null").unwrap(), Value::Null);
    assert_eq!(decode("true").unwrap(), Value::Bool(true));
    assert_eq!(decode("false").unwrap(), Value::Bool(false));
    assert_eq!(decode("42").unwrap(), Value::Number(Number::Integer(42)));
    assert_eq!(decode("-3.5").unwrap(), Value::Number(Number::Float(-3.5)));
    assert_eq!(decode("hello").unwrap(), Value::from("hello"));
    assert_eq!(decode("\"quoted text\"").unwrap(), Value::from("quoted text"));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(decode("").unwrap_err(), Error::EmptyInput);
    assert_eq!(decode("   \n\n  ").unwrap_err(), Error::EmptyInput);
}

#[test]
fn flat_object() {
    let value = decode("name: Alice\nage: 30\nactive: true").unwrap();
    assert_eq!(
        value,
        toon!({ "name": "Alice", "age": 30, "active": true })
    );
}

#[test]
fn nested_objects() {
    let value = decode("user:\n  name: Alice\n  address:\n    city: Berlin").unwrap();
    assert_eq!(
        value,
        toon!({ "user": { "name": "Alice", "address": { "city": "Berlin" } } })
    );
}

#[test]
fn empty_object_value() {
    assert_eq!(decode("config:").unwrap(), toon!({ "config": {} }));
    // A trailing key with nothing deeper is also empty.
    assert_eq!(
        decode("a: 1\nconfig:").unwrap(),
        toon!({ "a": 1, "config": {} })
    );
}

#[test]
fn quoted_keys() {
    let value = decode("\"a:b\": 1\n\"with space\": 2").unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("a:b"), Some(&Value::from(1)));
    assert_eq!(obj.get("with space"), Some(&Value::from(2)));
}

#[test]
fn quoted_values_and_escapes() {
    let value = decode("msg: \"line1\\nline2\"\npath: \"C:\\\\temp\"").unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("msg"), Some(&Value::from("line1\nline2")));
    assert_eq!(obj.get("path"), Some(&Value::from("C:\\temp")));
}

#[test]
fn invalid_escape_is_always_an_error() {
    let strict = decode("msg: \"bad\\q\"");
    assert_eq!(strict.unwrap_err(), Error::InvalidEscape('q'));

    let lenient = decode_with_options("msg: \"bad\\q\"", &DecodeOptions::new().with_strict(false));
    assert_eq!(lenient.unwrap_err(), Error::InvalidEscape('q'));
}

#[test]
fn unclosed_quote_is_always_an_error() {
    assert!(decode("msg: \"never closed").is_err());
    assert!(
        decode_with_options("msg: \"never closed", &DecodeOptions::new().with_strict(false))
            .is_err()
    );
}

#[test]
fn inline_array() {
    let value = decode("numbers[5]: 1,2,3,4,5").unwrap();
    assert_eq!(value, toon!({ "numbers": [1, 2, 3, 4, 5] }));
}

#[test]
fn inline_array_with_quoted_delimiters() {
    let value = decode("items[2]: \"a,b\",c").unwrap();
    assert_eq!(value, toon!({ "items": ["a,b", "c"] }));
}

#[test]
fn inline_array_strict_arity() {
    let err = decode("items[3]: a,b").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            what: "inline array items",
            expected: 3,
            found: 2,
        }
    );

    let lenient =
        decode_with_options("items[3]: a,b", &DecodeOptions::new().with_strict(false)).unwrap();
    assert_eq!(lenient, toon!({ "items": ["a", "b"] }));
}

#[test]
fn empty_array() {
    assert_eq!(decode("items[0]:").unwrap(), toon!({ "items": [] }));
    assert_eq!(decode("[0]:").unwrap(), Value::Array(vec![]));
}

#[test]
fn tabular_array() {
    let value = decode("users[2]{name,age}:\n  Alice,30\n  Bob,25").unwrap();
    assert_eq!(
        value,
        toon!({
            "users": [
                { "name": "Alice", "age": 30 },
                { "name": "Bob", "age": 25 }
            ]
        })
    );
}

#[test]
fn tabular_array_with_pipe_delimiter() {
    let value = decode("users[2|]{name|role}:\n  Alice|admin\n  Bob|user").unwrap();
    assert_eq!(
        value,
        toon!({
            "users": [
                { "name": "Alice", "role": "admin" },
                { "name": "Bob", "role": "user" }
            ]
        })
    );
}

#[test]
fn tabular_strict_row_count() {
    let err = decode("users[3]{name,age}:\n  Alice,30").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            what: "tabular rows",
            expected: 3,
            found: 1,
        }
    );
}

#[test]
fn list_array_of_scalars() {
    let value = decode("items[3]:\n  - one\n  - two\n  - 3").unwrap();
    assert_eq!(value, toon!({ "items": ["one", "two", 3] }));
}

#[test]
fn list_array_strict_arity() {
    let err = decode("items[3]:\n  - one\n  - two").unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            what: "list array items",
            expected: 3,
            found: 2,
        }
    );

    let lenient = decode_with_options(
        "items[3]:\n  - one\n  - two",
        &DecodeOptions::new().with_strict(false),
    )
    .unwrap();
    assert_eq!(
        lenient.as_object().unwrap().get("items").unwrap(),
        &toon!(["one", "two"])
    );
}

#[test]
fn list_items_as_records() {
    let value = decode(
        "items[2]:\n  - id: 1\n    name: First\n  - id: 2\n    name: Second",
    )
    .unwrap();
    assert_eq!(
        value,
        toon!({
            "items": [
                { "id": 1, "name": "First" },
                { "id": 2, "name": "Second" }
            ]
        })
    );
}

#[test]
fn list_item_record_with_nested_container() {
    let value = decode("items[1]:\n  - id: 1\n    meta:\n      depth: 3").unwrap();
    assert_eq!(
        value,
        toon!({ "items": [{ "id": 1, "meta": { "depth": 3 } }] })
    );
}

#[test]
fn list_item_nested_inline_arrays() {
    let value = decode("grid[2]:\n  - [2]: 1,2\n  - [2]: 3,4").unwrap();
    assert_eq!(value, toon!({ "grid": [[1, 2], [3, 4]] }));
}

#[test]
fn root_bare_array() {
    let value = decode("[3]: a,b,c").unwrap();
    assert_eq!(value, toon!(["a", "b", "c"]));

    let value = decode("[2]:\n  - x\n  - y").unwrap();
    assert_eq!(value, toon!(["x", "y"]));
}

#[test]
fn keyed_header_at_root_decodes_as_object() {
    let value = decode("users[2]{name,age}:\n  Alice,30\n  Bob,25").unwrap();
    assert!(value.is_object());
}

#[test]
fn blank_lines_are_structurally_ignored() {
    let value = decode("a: 1\n\nitems[2]:\n\n  - x\n\n  - y\n").unwrap();
    assert_eq!(value, toon!({ "a": 1, "items": ["x", "y"] }));
}

#[test]
fn indentation_must_match_the_unit_in_strict_mode() {
    let err = decode("parent:\n   child: 1").unwrap_err();
    assert_eq!(
        err,
        Error::IndentationUnit {
            line: 2,
            unit: 2,
            found: 3,
        }
    );

    // The same text parses once the unit matches the actual width.
    let value = decode_with_options("parent:\n   child: 1", &DecodeOptions::new().with_indent(3))
        .unwrap();
    assert_eq!(value, toon!({ "parent": { "child": 1 } }));
}

#[test]
fn tabs_in_indentation_are_rejected_in_strict_mode() {
    let err = decode("parent:\n\tchild: 1").unwrap_err();
    assert_eq!(err, Error::TabIndentation { line: 2 });
}

#[test]
fn lenient_mode_tolerates_uneven_indentation() {
    let value = decode_with_options(
        "parent:\n   child: 1",
        &DecodeOptions::new().with_strict(false),
    )
    .unwrap();
    assert_eq!(value, toon!({ "parent": { "child": 1 } }));
}

#[test]
fn four_space_indent_unit() {
    let options = DecodeOptions::new().with_indent(4);
    let value = decode_with_options("parent:\n    child: 1", &options).unwrap();
    assert_eq!(value, toon!({ "parent": { "child": 1 } }));
}

#[test]
fn over_indented_line_is_an_error() {
    let err = decode("a: 1\n    b: 2").unwrap_err();
    assert_eq!(err, Error::UnexpectedIndentation { line: 2 });
}

#[test]
fn missing_colon_is_an_error() {
    assert!(decode("a: 1\njust some text").is_err());
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let value = decode("a: 1\nb: 2\na: 3").unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a"), Some(&Value::from(3)));
}

#[test]
fn numeric_widening() {
    // Fits in i64.
    assert_eq!(
        decode("n: 9223372036854775807").unwrap(),
        toon!({ "n": 9223372036854775807i64 })
    );
    // Overflows i64, widens to float.
    let value = decode("n: 92233720368547758080").unwrap();
    match value.as_object().unwrap().get("n").unwrap() {
        Value::Number(Number::Float(f)) => assert!(*f > 9.2e18),
        other => panic!("expected float, got {other:?}"),
    }
}

#[test]
fn numeric_lookalikes_stay_strings() {
    let value = decode("a: Infinity\nb: NaN\nc: 1.2.3").unwrap();
    assert_eq!(
        value,
        toon!({ "a": "Infinity", "b": "NaN", "c": "1.2.3" })
    );
}

#[test]
fn length_marker_is_accepted() {
    let value = decode("items[#3]: a,b,c").unwrap();
    assert_eq!(value, toon!({ "items": ["a", "b", "c"] }));
}

#[test]
fn end_to_end_example() {
    let value = decode("users[2]{name,age}:\n  Alice,30\n  Bob,25").unwrap();
    assert_eq!(
        value,
        toon!({
            "users": [
                { "name": "Alice", "age": 30 },
                { "name": "Bob", "age": 25 }
            ]
        })
    );
}
