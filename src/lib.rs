//! # toon_codec
//!
//! A codec for TOON (Token-Oriented Object Notation): a compact,
//! indentation-based text notation covering the same value space as JSON —
//! null, booleans, numbers, strings, arrays, and ordered objects — with
//! fewer tokens by using array-length headers, tabular rows, and inline
//! primitive lists.
//!
//! ## Key Features
//!
//! - **Token-Efficient**: array headers, inline scalar lists, and tabular
//!   rows eliminate repeated keys and punctuation
//! - **Dynamic Value Tree**: a closed [`Value`] union with exhaustive
//!   matching everywhere, plus the [`toon!`] macro for literals
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Strict by Default**: declared array lengths, tabular arity, and
//!   indentation are validated on decode, with line-numbered errors
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Tabular Arrays
//!
//! Arrays of uniform records serialize as compact tables:
//!
//! ```rust
//! use serde::Serialize;
//! use toon_codec::to_string;
//!
//! #[derive(Serialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let toon = to_string(&products).unwrap();
//! assert_eq!(toon, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99");
//! ```
//!
//! ## Dynamic Values
//!
//! The decoder produces a [`Value`] tree directly; the [`toon!`] macro
//! builds one for the encoder:
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let value = decode("users[2]{name,age}:\n  Alice,30\n  Bob,25").unwrap();
//! let users = value.as_object().unwrap().get("users").unwrap();
//! assert_eq!(users.as_array().unwrap().len(), 2);
//!
//! let text = encode(&toon!({ "items": ["a", "b", "c"] }));
//! assert_eq!(text, "items[3]: a,b,c");
//! ```
//!
//! ## Options
//!
//! [`EncodeOptions`] controls indentation, the delimiter (comma, tab, or
//! pipe), and the optional `#` length marker; [`DecodeOptions`] controls
//! indentation and strict-mode validation. See the [`format`](mod@crate::format)
//! module for the full text grammar.
//!
//! ## Concurrency
//!
//! Encode and decode are pure, synchronous functions with call-local state
//! only; concurrent calls on independent inputs need no locking.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod ser;
pub mod text;
pub mod value;

pub use de::Deserializer;
pub use encode::LineWriter;
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use parser::ArrayHeaderInfo;
pub use scanner::{BlankLineInfo, LineCursor, ParsedLine, ScanResult};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Encodes a value tree as TOON text with default options.
///
/// The closed [`Value`] union makes encoding total: every representable
/// tree has a rendering.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode, toon};
///
/// let value = toon!({ "name": "Alice", "age": 30 });
/// assert_eq!(encode(&value), "name: Alice\nage: 30");
/// ```
#[must_use]
pub fn encode(value: &Value) -> String {
    encode::encode(value, &EncodeOptions::default())
}

/// Encodes a value tree as TOON text with the given options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode_with_options, toon, Delimiter, EncodeOptions};
///
/// let value = toon!({ "items": ["a", "b"] });
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// assert_eq!(encode_with_options(&value, &options), "items[2|]: a|b");
/// ```
#[must_use]
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> String {
    encode::encode(value, options)
}

/// Decodes TOON text into a value tree with default options (2-space
/// indent, strict mode).
///
/// # Examples
///
/// ```rust
/// use toon_codec::decode;
///
/// let value = decode("name: Alice\nage: 30").unwrap();
/// let obj = value.as_object().unwrap();
/// assert_eq!(obj.get("age").unwrap().as_i64(), Some(30));
/// ```
///
/// # Errors
///
/// Returns an error for empty input and for any grammar or strict-mode
/// violation.
pub fn decode(input: &str) -> Result<Value> {
    decode::decode(input, &DecodeOptions::default())
}

/// Decodes TOON text into a value tree with the given options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode_with_options, DecodeOptions};
///
/// // Lenient mode accepts a length mismatch.
/// let options = DecodeOptions::new().with_strict(false);
/// let value = decode_with_options("items[3]: a,b", &options).unwrap();
/// let items = value.as_object().unwrap().get("items").unwrap();
/// assert_eq!(items.as_array().unwrap().len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error for empty input and for any grammar violation; strict
/// mode additionally enforces indentation and declared array lengths.
pub fn decode_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::decode(input, options)
}

/// Converts any `T: Serialize` into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the TOON value
/// space (e.g. a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserializes a [`Value`] tree into any `T: DeserializeOwned`.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::{from_value, toon};
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(toon!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the tree does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}

/// Serializes any `T: Serialize` to a TOON string with default options.
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`] tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a TOON string with the given options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::{to_string_with_options, Delimiter, EncodeOptions};
///
/// #[derive(Serialize)]
/// struct Data { tags: Vec<String> }
///
/// let data = Data { tags: vec!["a".to_string(), "b".to_string()] };
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// assert_eq!(to_string_with_options(&data, &options).unwrap(), "tags[2|]: a|b");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`] tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(encode::encode(&to_value(value)?, options))
}

/// Deserializes an instance of `T` from a string of TOON text with default
/// options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOON or does not match the
/// shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserializes an instance of `T` from a string of TOON text with the
/// given options.
///
/// # Errors
///
/// Returns an error if the input is not valid TOON or does not match the
/// shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode::decode(s, options)?)
}

/// Serializes any `T: Serialize` to a writer in TOON format.
///
/// # Errors
///
/// Returns an error if serialization fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a writer in TOON format with the given
/// options.
///
/// # Errors
///
/// Returns an error if serialization fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes()).map_err(Error::io)
}

/// Deserializes an instance of `T` from an I/O stream of TOON text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use std::io::Cursor;
/// use toon_codec::from_reader;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the read fails, the input is not valid TOON, or the
/// data does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_reader_with_options(reader, &DecodeOptions::default())
}

/// Deserializes an instance of `T` from an I/O stream of TOON text with the
/// given options.
///
/// # Errors
///
/// Returns an error if the read fails, the input is not valid TOON, or the
/// data does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: &DecodeOptions) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    from_str_with_options(&text, options)
}

impl Value {
    /// Renders this value as TOON text with default options.
    ///
    /// ```rust
    /// use toon_codec::toon;
    ///
    /// assert_eq!(toon!({ "ok": true }).to_toon(), "ok: true");
    /// ```
    #[must_use]
    pub fn to_toon(&self) -> String {
        encode(self)
    }
}

impl std::str::FromStr for Value {
    type Err = Error;

    /// Parses TOON text with default options.
    ///
    /// ```rust
    /// use toon_codec::Value;
    ///
    /// let value: Value = "count: 3".parse().unwrap();
    /// assert!(value.is_object());
    /// ```
    fn from_str(s: &str) -> Result<Value> {
        decode(s)
    }
}
