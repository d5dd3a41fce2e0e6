//! Encoder behavior: representation selection, quoting rules, header
//! formatting, and option handling.

use toon_codec::{encode, encode_with_options, toon, Delimiter, EncodeOptions, Value};

#[test]
fn root_scalars_render_bare() {
    assert_eq!(encode(&Value::Null), "null");
    assert_eq!(encode(&Value::Bool(false)), "false");
    assert_eq!(encode(&Value::from(42)), "42");
    assert_eq!(encode(&Value::from(2.5)), "2.5");
    assert_eq!(encode(&Value::from("hello")), "hello");
}

#[test]
fn object_entries_keep_insertion_order() {
    let value = toon!({ "z": 1, "a": 2, "m": 3 });
    assert_eq!(encode(&value), "z: 1\na: 2\nm: 3");
}

#[test]
fn nested_objects_indent() {
    let value = toon!({ "user": { "name": "Alice", "address": { "city": "Berlin" } } });
    assert_eq!(
        encode(&value),
        "user:\n  name: Alice\n  address:\n    city: Berlin"
    );
}

#[test]
fn empty_containers() {
    assert_eq!(encode(&toon!({ "items": [] })), "items[0]:");
    assert_eq!(encode(&toon!({ "config": {} })), "config:");
    assert_eq!(encode(&Value::Array(vec![])), "[0]:");
}

#[test]
fn all_scalar_arrays_go_inline() {
    assert_eq!(
        encode(&toon!({ "mixed": [1, "two", true, null] })),
        "mixed[4]: 1,two,true,null"
    );
}

#[test]
fn uniform_records_go_tabular() {
    let value = toon!({
        "users": [
            { "name": "Alice", "age": 30 },
            { "name": "Bob", "age": 25 }
        ]
    });
    assert_eq!(encode(&value), "users[2]{name,age}:\n  Alice,30\n  Bob,25");
}

#[test]
fn tabular_requires_identical_key_sets() {
    let value = toon!({
        "items": [
            { "id": 1, "name": "First" },
            { "id": 2 }
        ]
    });
    assert_eq!(
        encode(&value),
        "items[2]:\n  - id: 1\n    name: First\n  - id: 2"
    );
}

#[test]
fn tabular_requires_scalar_values() {
    let value = toon!({
        "items": [
            { "id": 1, "tags": ["a"] },
            { "id": 2, "tags": ["b"] }
        ]
    });
    assert_eq!(
        encode(&value),
        "items[2]:\n  - id: 1\n    tags[1]: a\n  - id: 2\n    tags[1]: b"
    );
}

#[test]
fn heterogeneous_arrays_fall_back_to_list() {
    let value = toon!({ "items": [1, { "id": 2 }, "three"] });
    assert_eq!(
        encode(&value),
        "items[3]:\n  - 1\n  - id: 2\n  - three"
    );
}

#[test]
fn nested_scalar_arrays_inline_inside_list_items() {
    let value = toon!({ "grid": [[1, 2], [3, 4]] });
    assert_eq!(encode(&value), "grid[2]:\n  - [2]: 1,2\n  - [2]: 3,4");
}

#[test]
fn object_list_item_with_container_first_field() {
    let value = toon!({
        "items": [{ "meta": { "x": 1 }, "id": 7 }]
    });
    assert_eq!(
        encode(&value),
        "items[1]:\n  - meta:\n    x: 1\n    id: 7"
    );
}

#[test]
fn delimiter_fidelity() {
    let value = toon!({ "items": ["a", "b", "c"] });
    let piped = encode_with_options(&value, &EncodeOptions::new().with_delimiter(Delimiter::Pipe));
    assert_eq!(piped, "items[3|]: a|b|c");

    let tabbed = encode_with_options(&value, &EncodeOptions::new().with_delimiter(Delimiter::Tab));
    assert_eq!(tabbed, "items[3\t]: a\tb\tc");
}

#[test]
fn tabular_headers_carry_the_delimiter() {
    let value = toon!({
        "users": [
            { "name": "Alice", "role": "admin" },
            { "name": "Bob", "role": "user" }
        ]
    });
    let piped = encode_with_options(&value, &EncodeOptions::new().with_delimiter(Delimiter::Pipe));
    assert_eq!(piped, "users[2|]{name|role}:\n  Alice|admin\n  Bob|user");
}

#[test]
fn length_marker_option() {
    let value = toon!({ "items": [1, 2] });
    let text = encode_with_options(&value, &EncodeOptions::new().with_length_marker(true));
    assert_eq!(text, "items[#2]: 1,2");
}

#[test]
fn custom_indent_unit() {
    let value = toon!({ "a": { "b": { "c": 1 } } });
    let text = encode_with_options(&value, &EncodeOptions::new().with_indent(4));
    assert_eq!(text, "a:\n    b:\n        c: 1");
}

#[test]
fn reserved_words_and_numbers_are_quoted() {
    assert_eq!(encode(&toon!({ "v": "true" })), "v: \"true\"");
    assert_eq!(encode(&toon!({ "v": "null" })), "v: \"null\"");
    assert_eq!(encode(&toon!({ "v": "42" })), "v: \"42\"");
    assert_eq!(encode(&toon!({ "v": "-1.5e3" })), "v: \"-1.5e3\"");
}

#[test]
fn structural_characters_force_quoting() {
    assert_eq!(encode(&toon!({ "v": "a:b" })), "v: \"a:b\"");
    assert_eq!(encode(&toon!({ "v": "a[b]" })), "v: \"a[b]\"");
    assert_eq!(encode(&toon!({ "v": "- item" })), "v: \"- item\"");
    assert_eq!(encode(&toon!({ "v": "#tag" })), "v: \"#tag\"");
    assert_eq!(encode(&toon!({ "v": "line\nbreak" })), "v: \"line\\nbreak\"");
}

#[test]
fn only_the_active_delimiter_forces_quoting() {
    let value = toon!({ "v": "a,b" });
    assert_eq!(encode(&value), "v: \"a,b\"");
    let piped = encode_with_options(&value, &EncodeOptions::new().with_delimiter(Delimiter::Pipe));
    assert_eq!(piped, "v: a,b");
}

#[test]
fn internal_spaces_stay_unquoted() {
    assert_eq!(encode(&toon!({ "v": "hello world" })), "v: hello world");
    assert_eq!(encode(&toon!({ "v": " padded" })), "v: \" padded\"");
    assert_eq!(encode(&toon!({ "v": "" })), "v: \"\"");
}

#[test]
fn unsafe_keys_are_quoted() {
    assert_eq!(encode(&toon!({ "a:b": 1 })), "\"a:b\": 1");
    assert_eq!(encode(&toon!({ "true": 1 })), "\"true\": 1");
    assert_eq!(encode(&toon!({ "has space": 1 })), "has space: 1");
}

#[test]
fn integral_floats_print_without_decimal_point() {
    assert_eq!(encode(&Value::from(5.0)), "5");
    assert_eq!(encode(&toon!({ "value": 5.0 })), "value: 5");
    assert_eq!(encode(&toon!({ "value": -0.0 })), "value: 0");
    assert_eq!(encode(&toon!({ "value": 2.5 })), "value: 2.5");
}
