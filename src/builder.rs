//! Builder pattern for creating SenML packs

use crate::keys::SUPPORTED_VERSION;
use crate::pack::{BaseInfo, Pack};
use crate::record::{Record, Value};

/// Builder for creating SenML packs with a fluent API
#[derive(Debug, Default)]
pub struct PackBuilder {
    base: BaseInfo,
    records: Vec<Record>,
}

impl PackBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SenML version
    ///
    /// Zero clears the version. Versions above [`SUPPORTED_VERSION`] are
    /// ignored, leaving the pack at the default version.
    pub fn version(mut self, version: u8) -> Self {
        if version > SUPPORTED_VERSION {
            tracing::warn!(version, "ignoring unsupported SenML version");
            return self;
        }
        self.base.version = (version != 0).then_some(version);
        self
    }

    /// Set the base name for all records
    pub fn base_name<S: Into<String>>(mut self, name: S) -> Self {
        self.base.base_name = Some(name.into());
        self
    }

    /// Set the base time for all records
    pub fn base_time(mut self, time: f64) -> Self {
        self.base.base_time = Some(time);
        self
    }

    /// Set the base unit for all records
    pub fn base_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.base.base_unit = Some(unit.into());
        self
    }

    /// Set the base value
    pub fn base_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.base.base_value = value.into();
        self
    }

    /// Add a record with a numeric value
    pub fn add_value<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.records.push(Record::with_value(name, value));
        self
    }

    /// Add a record with a string value
    pub fn add_string_value<S: Into<String>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.records.push(Record::with_string_value(name, value));
        self
    }

    /// Add a record with a boolean value
    pub fn add_bool_value<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.records.push(Record::with_bool_value(name, value));
        self
    }

    /// Add a record with binary data
    pub fn add_data_value<S: Into<String>>(mut self, name: S, data: Vec<u8>) -> Self {
        self.records.push(Record::with_data_value(name, data));
        self
    }

    /// Add a measurement with a time relative to the base time
    pub fn add_measurement<S: Into<String>>(mut self, name: S, value: f64, time: f64) -> Self {
        self.records.push(Record::with_value(name, value).with_time(time));
        self
    }

    /// Add an existing record
    pub fn add_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Add multiple records at once
    pub fn add_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        self.records.extend(records);
        self
    }

    /// Build the pack
    ///
    /// Base information is attached only if at least one base field was set.
    pub fn build(self) -> Pack {
        Pack {
            base_info: (!self.base.is_empty()).then_some(self.base),
            records: self.records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_without_base() {
        let pack = PackBuilder::new()
            .add_value("temp", 22.5)
            .add_bool_value("door", false)
            .build();

        assert!(pack.base_info.is_none());
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.records[1].value, Value::Bool(false));
    }

    #[test]
    fn test_builder_version_bounds() {
        let pack = PackBuilder::new().version(0).add_value("a", 1.0).build();
        assert!(pack.base_info.is_none());

        let pack = PackBuilder::new()
            .version(3)
            .version(9)
            .base_name("d/")
            .build();
        let base = pack.base_info.as_ref().unwrap();
        assert_eq!(base.version, Some(3));
        assert_eq!(base.effective_version(), 3);
    }

    #[test]
    fn test_builder_with_base() {
        let pack = PackBuilder::new()
            .version(5)
            .base_name("urn:dev:sensor1/")
            .base_time(1_640_995_200.0)
            .base_unit("Cel")
            .base_value(20.0)
            .add_measurement("temp", 2.5, 60.0)
            .add_string_value("status", "OK")
            .add_data_value("raw", vec![0xff])
            .add_records(vec![Record::with_value("x", 1.0)])
            .add_record(Record::new().with_sum(3.0))
            .build();

        let base = pack.base_info.as_ref().unwrap();
        assert_eq!(base.version, Some(5));
        assert_eq!(base.base_unit.as_deref(), Some("Cel"));
        assert_eq!(base.base_value, Value::Float(20.0));
        assert_eq!(pack.len(), 5);
        assert_eq!(pack.records[0].time, Some(60.0));
        assert_eq!(pack.records[4].sum, Some(3.0));

        let resolved = pack.resolve();
        assert_eq!(resolved[0].name.as_deref(), Some("urn:dev:sensor1/temp"));
        assert_eq!(resolved[0].value, Value::Float(22.5));
        assert_eq!(resolved[0].time, Some(1_640_995_260.0));
    }
}
