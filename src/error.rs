//! Error types for SenML decoding and encoding

use std::fmt;

use thiserror::Error;

use crate::keys::Label;

/// Where in the input a syntax error was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// One-based line and column, as reported by the JSON parser
    LineColumn { line: usize, column: usize },
    /// Byte offset, as reported by the CBOR parser
    Offset(usize),
    /// The parser did not report a position
    Unknown,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::LineColumn { line, column } => {
                write!(f, "line {}, column {}", line, column)
            }
            Position::Offset(offset) => write!(f, "byte offset {}", offset),
            Position::Unknown => f.write_str("unknown position"),
        }
    }
}

/// Errors that can occur while decoding a SenML pack
///
/// Indices refer to the position of the offending element in the wire array.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input is not valid JSON / CBOR
    #[error("Malformed input at {position}: {message}")]
    MalformedSyntax { position: Position, message: String },

    /// The document root is not an array
    #[error("SenML pack is not an array")]
    NotAnArray,

    /// An array element is not an object / map
    #[error("Record #{0} is not an object")]
    InvalidRecord(usize),

    /// A `vb` value is not a boolean
    #[error("Record #{0}: vb is not a boolean value")]
    InvalidBooleanValue(usize),

    /// More than one value key on the same record
    #[error("Record #{0} carries more than one value field")]
    AmbiguousValue(usize),

    /// `bver` outside of the supported range
    #[error("Unsupported SenML version: {version}")]
    UnsupportedVersion { version: u64 },

    /// A recognized field has the wrong wire type
    #[error("Record #{index}: invalid value for field '{label}'")]
    InvalidField { index: usize, label: Label },

    /// The pack holds more records than the configured limit
    #[error("SenML pack holds more than {limit} records")]
    TooManyRecords { limit: usize },
}

impl DecodeError {
    /// Create a syntax error
    pub fn malformed<S: Into<String>>(position: Position, message: S) -> Self {
        Self::MalformedSyntax {
            position,
            message: message.into(),
        }
    }

    /// Create a wrong-type error for `label`
    ///
    /// A bad `vb` is reported as [`DecodeError::InvalidBooleanValue`].
    pub fn invalid_field(index: usize, label: Label) -> Self {
        match label {
            Label::BoolValue => Self::InvalidBooleanValue(index),
            label => Self::InvalidField { index, label },
        }
    }
}

/// Errors that can occur while encoding a SenML pack
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// JSON has no representation for NaN or infinity
    #[error("Field '{label}' holds a non-finite number")]
    NonFiniteNumber { label: Label },

    /// A binary base value cannot be told apart from a string in JSON
    #[error("Binary base values cannot be encoded in this format")]
    UnsupportedBaseValue,

    /// `bver` above the highest version this codec speaks
    #[error("Unsupported SenML version: {version}")]
    UnsupportedVersion { version: u8 },

    /// The caller-supplied buffer cannot hold the encoded pack
    #[error("Output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// The underlying serializer failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl EncodeError {
    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let position = if err.line() == 0 {
            Position::Unknown
        } else {
            Position::LineColumn {
                line: err.line(),
                column: err.column(),
            }
        };
        Self::malformed(position, err.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::de::Error<std::io::Error>> for DecodeError {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        use ciborium::de::Error;

        let position = match &err {
            Error::Syntax(offset) => Position::Offset(*offset),
            Error::Semantic(Some(offset), _) => Position::Offset(*offset),
            _ => Position::Unknown,
        };
        Self::malformed(position, err.to_string())
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::ser::Error<std::io::Error>> for EncodeError {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_maps_bool_value() {
        assert_eq!(
            DecodeError::invalid_field(3, Label::BoolValue),
            DecodeError::InvalidBooleanValue(3)
        );
        assert_eq!(
            DecodeError::invalid_field(1, Label::Name),
            DecodeError::InvalidField {
                index: 1,
                label: Label::Name
            }
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DecodeError::InvalidRecord(2).to_string(),
            "Record #2 is not an object"
        );
        assert_eq!(
            DecodeError::invalid_field(0, Label::UpdateTime).to_string(),
            "Record #0: invalid value for field 'ut'"
        );
        assert_eq!(
            DecodeError::malformed(Position::Offset(7), "eof").to_string(),
            "Malformed input at byte offset 7: eof"
        );
        assert_eq!(
            EncodeError::BufferTooSmall {
                needed: 10,
                available: 4
            }
            .to_string(),
            "Output buffer too small: need 10 bytes, have 4"
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_error_carries_line_and_column() {
        let err = serde_json::from_str::<serde_json::Value>("[\n  {\"n\": }]").unwrap_err();
        match DecodeError::from(err) {
            DecodeError::MalformedSyntax {
                position: Position::LineColumn { line, .. },
                ..
            } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
