//! SenML labels and their JSON / CBOR key projections (RFC 8428 §4.1, §6)

use std::fmt;

/// Highest `bver` value this codec accepts
pub const SUPPORTED_VERSION: u8 = 5;

/// A SenML attribute label
///
/// Every label has exactly one JSON key (a short string) and one CBOR key
/// (a small integer). Base labels use negative CBOR keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Version,
    BaseName,
    BaseTime,
    BaseUnit,
    BaseValue,
    Name,
    Unit,
    Value,
    StringValue,
    BoolValue,
    ValueSum,
    Time,
    UpdateTime,
    DataValue,
}

impl Label {
    /// Every label, in CBOR key order
    pub const ALL: [Label; 14] = [
        Label::BaseValue,
        Label::BaseUnit,
        Label::BaseTime,
        Label::BaseName,
        Label::Version,
        Label::Name,
        Label::Unit,
        Label::Value,
        Label::StringValue,
        Label::BoolValue,
        Label::ValueSum,
        Label::Time,
        Label::UpdateTime,
        Label::DataValue,
    ];

    /// Labels that mark an element as carrying base information
    pub const BASE: [Label; 5] = [
        Label::Version,
        Label::BaseName,
        Label::BaseTime,
        Label::BaseUnit,
        Label::BaseValue,
    ];

    /// Record value labels; at most one may appear per record
    pub const VALUES: [Label; 4] = [
        Label::Value,
        Label::StringValue,
        Label::BoolValue,
        Label::DataValue,
    ];

    /// Key used in the JSON representation
    pub const fn json_key(self) -> &'static str {
        match self {
            Label::Version => "bver",
            Label::BaseName => "bn",
            Label::BaseTime => "bt",
            Label::BaseUnit => "bu",
            Label::BaseValue => "bv",
            Label::Name => "n",
            Label::Unit => "u",
            Label::Value => "v",
            Label::StringValue => "vs",
            Label::BoolValue => "vb",
            Label::ValueSum => "s",
            Label::Time => "t",
            Label::UpdateTime => "ut",
            Label::DataValue => "vd",
        }
    }

    /// Key used in the CBOR representation
    pub const fn cbor_key(self) -> i8 {
        match self {
            Label::Version => -1,
            Label::BaseName => -2,
            Label::BaseTime => -3,
            Label::BaseUnit => -4,
            Label::BaseValue => -5,
            Label::Name => 0,
            Label::Unit => 1,
            Label::Value => 2,
            Label::StringValue => 3,
            Label::BoolValue => 4,
            Label::ValueSum => 5,
            Label::Time => 6,
            Label::UpdateTime => 7,
            Label::DataValue => 8,
        }
    }

    /// Look up a label by its JSON key
    pub fn from_json_key(key: &str) -> Option<Label> {
        Label::ALL.into_iter().find(|label| label.json_key() == key)
    }

    /// Look up a label by its CBOR key
    pub fn from_cbor_key(key: i128) -> Option<Label> {
        Label::ALL
            .into_iter()
            .find(|label| i128::from(label.cbor_key()) == key)
    }

    /// Whether this label belongs to base information
    pub const fn is_base(self) -> bool {
        self.cbor_key() < 0
    }

    /// Whether this label carries a record value
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            Label::Value | Label::StringValue | Label::BoolValue | Label::DataValue
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keys() {
        assert_eq!(Label::Version.json_key(), "bver");
        assert_eq!(Label::BaseName.json_key(), "bn");
        assert_eq!(Label::BaseTime.json_key(), "bt");
        assert_eq!(Label::BaseUnit.json_key(), "bu");
        assert_eq!(Label::BaseValue.json_key(), "bv");
        assert_eq!(Label::Name.json_key(), "n");
        assert_eq!(Label::Unit.json_key(), "u");
        assert_eq!(Label::Value.json_key(), "v");
        assert_eq!(Label::StringValue.json_key(), "vs");
        assert_eq!(Label::BoolValue.json_key(), "vb");
        assert_eq!(Label::ValueSum.json_key(), "s");
        assert_eq!(Label::Time.json_key(), "t");
        assert_eq!(Label::UpdateTime.json_key(), "ut");
        assert_eq!(Label::DataValue.json_key(), "vd");
    }

    #[test]
    fn test_cbor_keys() {
        assert_eq!(Label::Version.cbor_key(), -1);
        assert_eq!(Label::BaseName.cbor_key(), -2);
        assert_eq!(Label::BaseTime.cbor_key(), -3);
        assert_eq!(Label::BaseUnit.cbor_key(), -4);
        assert_eq!(Label::BaseValue.cbor_key(), -5);
        assert_eq!(Label::Name.cbor_key(), 0);
        assert_eq!(Label::Unit.cbor_key(), 1);
        assert_eq!(Label::Value.cbor_key(), 2);
        assert_eq!(Label::StringValue.cbor_key(), 3);
        assert_eq!(Label::BoolValue.cbor_key(), 4);
        assert_eq!(Label::ValueSum.cbor_key(), 5);
        assert_eq!(Label::Time.cbor_key(), 6);
        assert_eq!(Label::UpdateTime.cbor_key(), 7);
        assert_eq!(Label::DataValue.cbor_key(), 8);
    }

    #[test]
    fn test_lookup_is_inverse() {
        for label in Label::ALL {
            assert_eq!(Label::from_json_key(label.json_key()), Some(label));
            assert_eq!(
                Label::from_cbor_key(i128::from(label.cbor_key())),
                Some(label)
            );
        }
        assert_eq!(Label::from_json_key("bs"), None);
        assert_eq!(Label::from_cbor_key(9), None);
        assert_eq!(Label::from_cbor_key(-6), None);
    }

    #[test]
    fn test_scopes() {
        for label in Label::BASE {
            assert!(label.is_base());
            assert!(!label.is_value());
        }
        for label in Label::VALUES {
            assert!(!label.is_base());
            assert!(label.is_value());
        }
        assert_eq!(Label::ALL.iter().filter(|l| l.is_base()).count(), 5);
        assert!(!Label::ValueSum.is_value());
    }

    #[test]
    fn test_display_uses_json_key() {
        assert_eq!(Label::UpdateTime.to_string(), "ut");
    }
}
