//! TOON text format reference.
//!
//! This module documents the line-oriented, indentation-significant grammar
//! this crate reads and writes. It contains no code.
//!
//! # Objects
//!
//! Objects are newline-delimited `key: value` pairs. Nested objects indent
//! one level (default 2 spaces); a key with nothing after its colon and no
//! deeper line below it is an empty object.
//!
//! ```text
//! name: Alice
//! age: 30
//! address:
//!   city: Berlin
//!   zip: "10115"
//! settings:
//! ```
//!
//! Keys are written bare when they are non-empty, carry no leading or
//! trailing whitespace, are not `true`/`false`/`null`, do not parse as a
//! number, and contain none of `"` `:` `\` `[` `]` `{` `}` or control
//! whitespace. Anything else is double-quoted with backslash escapes. Key
//! order is preserved: the encoder walks entries in insertion order and the
//! decoder rebuilds them in the order first seen, overwriting on duplicates.
//!
//! # Scalars
//!
//! | Type    | Syntax                            | Example            |
//! |---------|-----------------------------------|--------------------|
//! | Null    | `null`                            | `value: null`      |
//! | Boolean | `true` / `false`                  | `active: true`     |
//! | Integer | decimal digits, optional sign     | `count: -42`       |
//! | Float   | decimal point or exponent         | `price: 19.99`     |
//! | String  | bare, or `"..."` with escapes     | `name: Alice`      |
//!
//! Numeric literals without `.` or an exponent decode as 64-bit integers,
//! widening to floats only on overflow. A float with an exact integral value
//! encodes with no decimal point and decodes back as an integer; this
//! normalization is deliberate and lossy.
//!
//! Strings stay bare under the same rules as keys, with two additions: a
//! bare scalar must not contain the active delimiter and must not start with
//! `- ` or `#`. Quoted strings support the escapes `\\` `\"` `\n` `\r` `\t`;
//! any other backslash sequence is an error.
//!
//! # Arrays
//!
//! Every array opens with a header: an optional key, a bracket segment, an
//! optional field list, and a terminating colon.
//!
//! ```text
//! key?[<#>?<len><delim>?]<{field,field,...}>?:
//! ```
//!
//! The bracket segment holds the declared length, optionally prefixed by the
//! `#` length marker and suffixed by a delimiter override (`|` or a tab; a
//! comma is the implicit default). The declared length is enforced in strict
//! mode.
//!
//! ## Inline arrays
//!
//! All-scalar arrays are written on the header line, delimiter-joined:
//!
//! ```text
//! numbers[5]: 1,2,3,4,5
//! flags[3|]: true|false|true
//! ```
//!
//! ## Tabular arrays
//!
//! Arrays of records that share one key set, with all-scalar values, carry
//! the field list in the header and one row per record at the next depth:
//!
//! ```text
//! users[2]{name,age}:
//!   Alice,30
//!   Bob,25
//! ```
//!
//! Fields follow the first record's key order. Rows are split by the active
//! delimiter; in strict mode every row must have exactly one value per
//! field.
//!
//! ## List arrays
//!
//! Everything else falls back to one `- ` item per line:
//!
//! ```text
//! items[3]:
//!   - 42
//!   - [2]: a,b
//!   - id: 7
//!     name: First
//! ```
//!
//! A list item is a scalar, a nested array header, or the first `key: value`
//! pair of a record whose remaining fields continue one level deeper.
//!
//! ## Empty collections
//!
//! ```text
//! items[0]:
//! config:
//! ```
//!
//! # Root forms
//!
//! A document is a single scalar, a key-less array header (`[N]...:`), or an
//! object. A keyed header at the root is an object member like any other.
//!
//! # Indentation and strict mode
//!
//! Depth is indentation width divided by the configured unit. In strict mode
//! (the default) the decoder rejects tabs in leading whitespace, indentation
//! that is not an exact multiple of the unit, and any array whose actual
//! item, row, or column count disagrees with its header. Lenient mode
//! relaxes only those checks; malformed syntax — unclosed quotes, bad
//! escapes, missing colons — is always a hard error. Blank lines are ignored
//! structurally and never count toward array lengths.

// Documentation only; no implementation code.
