//! SenML Pack - base information plus an ordered list of records

use std::fmt;

use crate::keys::SUPPORTED_VERSION;
use crate::record::{Record, Value};

/// Attributes declared once and applied to every record in a pack
///
/// Decoded from the first element of a wire pack when it carries at least
/// one base label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseInfo {
    /// Base Version (`bver`); `None` or `Some(0)` means [`SUPPORTED_VERSION`]
    pub version: Option<u8>,
    /// Base Name (`bn`) - prepended to record names
    pub base_name: Option<String>,
    /// Base Time (`bt`) - added to record times
    pub base_time: Option<f64>,
    /// Base Unit (`bu`) - used when a record has no unit
    pub base_unit: Option<String>,
    /// Base Value (`bv`)
    pub base_value: Value,
}

impl BaseInfo {
    /// Create empty base information
    pub fn new() -> Self {
        Self::default()
    }

    /// The version in effect, defaulting to [`SUPPORTED_VERSION`]
    pub fn effective_version(&self) -> u8 {
        self.wire_version().unwrap_or(SUPPORTED_VERSION)
    }

    /// The version written as `bver`; zero counts as absent
    pub fn wire_version(&self) -> Option<u8> {
        self.version.filter(|&version| version != 0)
    }

    /// Whether no base attribute is set
    pub fn is_empty(&self) -> bool {
        self.wire_version().is_none()
            && self.base_name.is_none()
            && self.base_time.is_none()
            && self.base_unit.is_none()
            && !self.base_value.is_defined()
    }
}

impl fmt::Display for BaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version:\t{}", self.effective_version())?;
        writeln!(
            f,
            "Base Name:\t{}",
            self.base_name.as_deref().unwrap_or("NULL")
        )?;
        writeln!(f, "Base Time:\t{:.6}", self.base_time.unwrap_or(0.0))?;
        writeln!(
            f,
            "Base Unit:\t{}",
            self.base_unit.as_deref().unwrap_or("NULL")
        )?;
        if self.base_value.is_defined() {
            writeln!(f, "Base Value:\t{}", self.base_value)?;
        }
        writeln!(f)
    }
}

/// A SenML Pack: optional base information and an ordered list of records
///
/// The pack owns every string and buffer it holds. Record order matches the
/// wire order and survives a decode/encode round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pack {
    /// Base information, if the wire pack carried any
    pub base_info: Option<BaseInfo>,
    /// Records in wire order
    pub records: Vec<Record>,
}

impl Pack {
    /// Create a new empty pack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pack from base information and records
    pub fn with_base_info(base_info: BaseInfo, records: Vec<Record>) -> Self {
        Self {
            base_info: Some(base_info),
            records,
        }
    }

    /// Get the number of records in this pack
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if this pack has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in this pack
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Pack {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            base_info: None,
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pack {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(base_info) = &self.base_info {
            write!(f, "{}", base_info)?;
        }
        for record in &self.records {
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Render a pack as human-readable text
///
/// The output is meant for people; it carries no round-trip guarantee.
pub fn format_pack(pack: &Pack) -> String {
    pack.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pack_creation() {
        let pack = Pack::new();
        assert!(pack.is_empty());
        assert_eq!(pack.len(), 0);
        assert!(pack.base_info.is_none());
    }

    #[test]
    fn test_pack_iteration() {
        let records = vec![
            Record::with_value("temp", 20.0),
            Record::with_value("humidity", 50.0),
        ];
        let pack: Pack = records.into_iter().collect();

        let mut count = 0;
        for record in &pack {
            count += 1;
            assert!(record.has_value());
        }
        assert_eq!(count, 2);
        assert_eq!(pack.iter().count(), 2);
    }

    #[test]
    fn test_base_info_defaults() {
        let base = BaseInfo::new();
        assert!(base.is_empty());
        assert_eq!(base.effective_version(), SUPPORTED_VERSION);

        let base = BaseInfo {
            version: Some(3),
            ..Default::default()
        };
        assert!(!base.is_empty());
        assert_eq!(base.effective_version(), 3);

        let base = BaseInfo {
            version: Some(0),
            ..Default::default()
        };
        assert!(base.is_empty());
        assert_eq!(base.wire_version(), None);
        assert_eq!(base.effective_version(), SUPPORTED_VERSION);
    }

    #[test]
    fn test_format_pack() {
        let pack = Pack::with_base_info(
            BaseInfo {
                base_name: Some("dev/".into()),
                base_value: Value::Float(1.0),
                ..Default::default()
            },
            vec![Record::with_string_value("state", "on").with_unit("%")],
        );

        let text = format_pack(&pack);
        assert_eq!(
            text,
            "Version:\t5\nBase Name:\tdev/\nBase Time:\t0.000000\nBase Unit:\tNULL\n\
             Base Value:\t1.000000\n\n\
             Name:\tstate\nUnit:\t%\nTime:\t0.000000\nUpdate Time:\t0\nValue:\ton\n\n"
        );
    }
}
