//! Base information detection and resolution
//!
//! Resolution combines each record with the pack's base information into a
//! [`ResolvedRecord`]. It never touches the pack itself, so encoding a decoded
//! pack reproduces the unresolved document.

use serde::Serialize;

use crate::entry::Entry;
use crate::keys::Label;
use crate::pack::{BaseInfo, Pack};
use crate::record::{Record, Value};

/// Whether a wire element carries base information
///
/// Only the first element of a pack is considered. An element qualifies when
/// it holds at least one base label.
pub(crate) fn is_base_entry<E: Entry>(entry: &E) -> bool {
    Label::BASE.into_iter().any(|label| entry.contains(label))
}

/// Whether a wire element carries any record label
pub(crate) fn has_record_fields<E: Entry>(entry: &E) -> bool {
    Label::ALL
        .into_iter()
        .filter(|label| !label.is_base())
        .any(|label| entry.contains(label))
}

/// A record with base information applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRecord {
    /// Base name followed by record name
    pub name: Option<String>,
    /// Record unit, else base unit
    pub unit: Option<String>,
    /// Base time plus record time
    pub time: Option<f64>,
    pub update_time: Option<u64>,
    pub sum: Option<f64>,
    /// Record value; numeric values include the base value
    pub value: Value,
}

impl Record {
    /// Resolve this record against base information
    pub fn resolve(&self, base: Option<&BaseInfo>) -> ResolvedRecord {
        let base_name = base.and_then(|b| b.base_name.as_deref());
        let base_unit = base.and_then(|b| b.base_unit.as_ref());
        let base_time = base.and_then(|b| b.base_time);

        let time = match (base_time, self.time) {
            (Some(bt), Some(t)) => Some(bt + t),
            (Some(bt), None) => Some(bt),
            (None, t) => t,
        };

        let value = match (base.map(|b| &b.base_value), &self.value) {
            (Some(Value::Float(bv)), Value::Float(v)) => Value::Float(bv + v),
            (_, value) => value.clone(),
        };

        ResolvedRecord {
            name: self.resolved_name(base_name),
            unit: self.unit.clone().or_else(|| base_unit.cloned()),
            time,
            update_time: self.update_time,
            sum: self.sum,
            value,
        }
    }
}

impl Pack {
    /// Resolve every record against this pack's base information
    pub fn resolve(&self) -> Vec<ResolvedRecord> {
        self.resolved().collect()
    }

    /// Lazily resolve records in order
    pub fn resolved(&self) -> impl Iterator<Item = ResolvedRecord> + '_ {
        let base = self.base_info.as_ref();
        self.records.iter().map(move |record| record.resolve(base))
    }
}
