//! Typed field access over one element of a generic wire tree
//!
//! The JSON and CBOR adapters each wrap a parsed map in an [`Entry`] and an
//! [`EntrySink`]. Everything above this layer sees only typed values.

use crate::error::{DecodeError, EncodeError};
use crate::keys::Label;
use crate::record::Value;

/// Result of reading one optional field
pub(crate) type Field<T> = Result<Option<T>, DecodeError>;

/// Read access to one wire map, keyed by [`Label`]
///
/// Each accessor returns `Ok(None)` when the key is absent and an error when
/// the key is present with the wrong wire type.
pub(crate) trait Entry {
    /// Position of this element in the wire array
    fn index(&self) -> usize;

    fn contains(&self, label: Label) -> bool;

    fn text(&self, label: Label) -> Field<String>;

    fn real(&self, label: Label) -> Field<f64>;

    fn unsigned(&self, label: Label) -> Field<u64>;

    fn boolean(&self, label: Label) -> Field<bool>;

    fn binary(&self, label: Label) -> Field<Vec<u8>>;

    /// A value of any kind the format can express under `label`
    fn scalar(&self, label: Label) -> Field<Value>;

    fn invalid(&self, label: Label) -> DecodeError {
        DecodeError::invalid_field(self.index(), label)
    }
}

/// Write access to one wire map under construction
pub(crate) trait EntrySink: Default {
    fn text(&mut self, label: Label, value: &str);

    fn real(&mut self, label: Label, value: f64) -> Result<(), EncodeError>;

    fn unsigned(&mut self, label: Label, value: u64);

    fn boolean(&mut self, label: Label, value: bool);

    fn binary(&mut self, label: Label, value: &[u8]) -> Result<(), EncodeError>;

    /// Write `value` under `label`; `Undefined` writes nothing
    fn value(&mut self, label: Label, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Undefined => Ok(()),
            Value::Float(v) => self.real(label, *v),
            Value::String(s) => {
                self.text(label, s);
                Ok(())
            }
            Value::Bool(b) => {
                self.boolean(label, *b);
                Ok(())
            }
            Value::Binary(data) => self.binary(label, data),
        }
    }
}

/// Whole, non-negative floats are accepted where an unsigned integer is expected
pub(crate) fn whole_seconds(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_seconds() {
        assert_eq!(whole_seconds(60.0), Some(60));
        assert_eq!(whole_seconds(0.0), Some(0));
        assert_eq!(whole_seconds(1.5), None);
        assert_eq!(whole_seconds(-1.0), None);
        assert_eq!(whole_seconds(f64::NAN), None);
        assert_eq!(whole_seconds(18_446_744_073_709_551_616.0), None);
        assert_eq!(whole_seconds(9_007_199_254_740_992.0), Some(1 << 53));
    }
}
