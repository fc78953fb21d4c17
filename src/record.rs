//! SenML Record types and values

use std::fmt;

use serde::Serialize;

use crate::keys::Label;

/// The value carried by a record or by base information
///
/// Exactly one variant is active. `Undefined` means no value key was present.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value
    #[default]
    Undefined,
    /// Numeric value (`v`)
    Float(f64),
    /// String value (`vs`)
    String(String),
    /// Boolean value (`vb`)
    Bool(bool),
    /// Opaque binary data (`vd`)
    Binary(Vec<u8>),
}

impl Value {
    /// Whether a value is present
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undefined)
    }

    /// The record label this value is written under, if any
    pub fn label(&self) -> Option<Label> {
        match self {
            Value::Undefined => None,
            Value::Float(_) => Some(Label::Value),
            Value::String(_) => Some(Label::StringValue),
            Value::Bool(_) => Some(Label::BoolValue),
            Value::Binary(_) => Some(Label::DataValue),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(data) => Some(data),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Binary(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Float(v) => write!(f, "{:.6}", v),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Binary(data) => {
                f.write_str("0x")?;
                for byte in data {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// A SenML Record represents a single sensor measurement
///
/// Fields are raw wire values: `name` and `time` are not yet combined with
/// the pack's base information. See [`Record::resolve`] for the effective view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Name (`n`), relative to the base name
    pub name: Option<String>,
    /// Unit (`u`)
    pub unit: Option<String>,
    /// Time (`t`), relative to the base time
    pub time: Option<f64>,
    /// Update time (`ut`) in seconds
    pub update_time: Option<u64>,
    /// Value sum (`s`), carried through unchanged
    pub sum: Option<f64>,
    /// The record's value
    pub value: Value,
}

impl Record {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with a numeric value
    pub fn with_value<S: Into<String>>(name: S, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value: Value::Float(value),
            ..Default::default()
        }
    }

    /// Create a record with a string value
    pub fn with_string_value<S: Into<String>, V: Into<String>>(name: S, value: V) -> Self {
        Self {
            name: Some(name.into()),
            value: Value::String(value.into()),
            ..Default::default()
        }
    }

    /// Create a record with a boolean value
    pub fn with_bool_value<S: Into<String>>(name: S, value: bool) -> Self {
        Self {
            name: Some(name.into()),
            value: Value::Bool(value),
            ..Default::default()
        }
    }

    /// Create a record with binary data
    pub fn with_data_value<S: Into<String>>(name: S, data: Vec<u8>) -> Self {
        Self {
            name: Some(name.into()),
            value: Value::Binary(data),
            ..Default::default()
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_update_time(mut self, seconds: u64) -> Self {
        self.update_time = Some(seconds);
        self
    }

    pub fn with_sum(mut self, sum: f64) -> Self {
        self.sum = Some(sum);
        self
    }

    /// Check if this record has a value
    pub fn has_value(&self) -> bool {
        self.value.is_defined()
    }

    /// Get the name of this record, prefixed with the base name if given
    pub fn resolved_name(&self, base_name: Option<&str>) -> Option<String> {
        match (&self.name, base_name) {
            (Some(name), Some(base)) => Some(format!("{}{}", base, name)),
            (Some(name), None) => Some(name.clone()),
            (None, Some(base)) => Some(base.to_string()),
            (None, None) => None,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:\t{}", self.name.as_deref().unwrap_or("NULL"))?;
        writeln!(f, "Unit:\t{}", self.unit.as_deref().unwrap_or("NULL"))?;
        writeln!(f, "Time:\t{:.6}", self.time.unwrap_or(0.0))?;
        writeln!(f, "Update Time:\t{}", self.update_time.unwrap_or(0))?;
        if let Some(sum) = self.sum {
            writeln!(f, "Sum:\t{:.6}", sum)?;
        }
        if self.value.is_defined() {
            writeln!(f, "Value:\t{}", self.value)?;
        }
        writeln!(f)
    }
}
