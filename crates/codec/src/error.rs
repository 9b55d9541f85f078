//! Error types for XML decoding and encoding.

use crate::path::XmlPath;
use thiserror::Error;

/// Errors produced while decoding XML into model types.
///
/// Structural failures carry the coding path from the document root to the
/// failure point. When a choice variant's tag matches but its payload fails
/// to decode, the payload's own error is propagated unchanged; it is never
/// rewritten into [`DecodeError::UnrecognizedChoice`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input was not well-formed XML.
    #[error("XML syntax error: {0}")]
    Syntax(String),

    /// The input was not valid UTF-8.
    #[error("invalid UTF-8 in input: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// I/O failure while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document root element does not match the requested type.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// A non-optional field had no corresponding attribute or child element.
    #[error("missing required field `{field}` at {path}")]
    MissingRequiredField { field: String, path: XmlPath },

    /// None of a choice type's declared tags were present.
    #[error("unrecognized choice for {} at {}: expected one of {}", .type_name, .path, .expected.join(", "))]
    UnrecognizedChoice {
        type_name: &'static str,
        expected: Vec<&'static str>,
        path: XmlPath,
    },

    /// A scalar value failed to parse.
    #[error("invalid value `{value}` at {path}: {reason}")]
    InvalidValue {
        value: String,
        reason: String,
        path: XmlPath,
    },
}

/// Errors produced while encoding model types to XML.
///
/// Encoding a well-typed value cannot fail structurally; these variants only
/// surface writer-level problems.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// I/O failure while writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the XML writer.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The serialized bytes were not valid UTF-8.
    #[error("serialized XML was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result alias for decode operations.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
