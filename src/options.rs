//! Configuration options for TOON encoding and decoding.
//!
//! Two independent option structs mirror the two halves of the codec:
//!
//! - [`EncodeOptions`]: indentation unit, delimiter, and the optional `#`
//!   length marker in array headers
//! - [`DecodeOptions`]: indentation unit and strict-mode validation
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{toon, encode_with_options, Delimiter, EncodeOptions};
//!
//! let value = toon!({ "items": ["a", "b", "c"] });
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(encode_with_options(&value, &options), "items[3|]: a|b|c");
//! ```

/// Delimiter choice for inline arrays and tabular rows.
///
/// Comma is the default and is implicit in headers; tab and pipe are
/// spelled out as a suffix inside the header's bracket segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Looks a delimiter up by its character.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Options controlling the encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level. Must be positive.
    pub indent: usize,
    /// Field separator for inline arrays and tabular rows.
    pub delimiter: Delimiter,
    /// When `true`, array lengths are written with a `#` prefix
    /// (`[#3]:` instead of `[3]:`).
    pub length_marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (2-space indent, comma delimiter, no marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    ///
    /// # Panics
    ///
    /// Panics if `indent` is zero.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        assert!(indent > 0, "indent must be positive, got: {indent}");
        self.indent = indent;
        self
    }

    /// Sets the delimiter for inline arrays and tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables the `#` length marker in array headers.
    #[must_use]
    pub fn with_length_marker(mut self, length_marker: bool) -> Self {
        self.length_marker = length_marker;
        self
    }
}

/// Options controlling the decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Spaces per nesting level. Must be positive.
    pub indent: usize,
    /// When `true` (the default), indentation must be an exact multiple of
    /// the unit, tabs are rejected in leading whitespace, and declared array
    /// lengths must match the parsed item counts exactly.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
        }
    }
}

impl DecodeOptions {
    /// Creates default options (2-space indent, strict mode on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    ///
    /// # Panics
    ///
    /// Panics if `indent` is zero.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        assert!(indent > 0, "indent must be positive, got: {indent}");
        self.indent = indent;
        self
    }

    /// Enables or disables strict-mode validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
