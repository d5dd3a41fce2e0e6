//! Error types for TOON encoding and decoding.
//!
//! Every failure mode of the codec maps to one [`Error`] variant. Errors are
//! raised at the point of violation and propagate straight to the caller of
//! [`decode`](fn@crate::decode)/[`from_str`](crate::from_str); there is no
//! line-skipping or best-effort recovery.

use std::fmt;
use thiserror::Error;

/// All errors the codec can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Decoding was handed an empty or blank-only string.
    #[error("cannot decode empty input: input must be a non-empty string")]
    EmptyInput,

    /// A tab appeared in leading whitespace (strict mode only).
    #[error("line {line}: tabs are not allowed in indentation in strict mode")]
    TabIndentation { line: usize },

    /// Indentation width is not a multiple of the configured unit
    /// (strict mode only).
    #[error("line {line}: indentation must be an exact multiple of {unit}, but found {found} spaces")]
    IndentationUnit {
        line: usize,
        unit: usize,
        found: usize,
    },

    /// Malformed syntax: bad header, missing colon, unclosed quote, and so on.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A line was nested deeper than its enclosing structure allows.
    #[error("line {line}: unexpected indentation")]
    UnexpectedIndentation { line: usize },

    /// Unknown backslash escape in a quoted string.
    #[error("invalid escape sequence: \\{0}")]
    InvalidEscape(char),

    /// A quoted string ended with an unmatched backslash.
    #[error("unterminated escape at end of string")]
    TrailingBackslash,

    /// Strict mode: an array's actual item/row/column count disagrees with
    /// the header-declared count.
    #[error("expected {expected} {what}, but found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// I/O failure while reading or writing TOON text.
    #[error("io error: {0}")]
    Io(String),

    /// Custom message, used by the serde integration.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        Error::Syntax(msg.into())
    }

    /// Creates an error with a custom display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    pub(crate) fn io(msg: impl fmt::Display) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

/// Alias for `std::result::Result` with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_numbers() {
        let err = Error::TabIndentation { line: 4 };
        assert!(err.to_string().contains("line 4"));

        let err = Error::IndentationUnit {
            line: 2,
            unit: 2,
            found: 3,
        };
        assert!(err.to_string().contains("multiple of 2"));
        assert!(err.to_string().contains("3 spaces"));
    }

    #[test]
    fn length_mismatch_names_the_shape() {
        let err = Error::LengthMismatch {
            what: "list array items",
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "expected 3 list array items, but found 2");
    }

    #[test]
    fn custom_preserves_message() {
        let err = Error::custom("something went wrong");
        assert!(err.to_string().contains("something went wrong"));
    }
}
