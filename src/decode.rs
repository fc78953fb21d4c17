//! Format-independent pack assembly

use crate::config::Config;
use crate::entry::Entry;
use crate::error::DecodeError;
use crate::keys::{Label, SUPPORTED_VERSION};
use crate::pack::{BaseInfo, Pack};
use crate::record::{Record, Value};
use crate::resolve;

/// Build a pack from the elements of a wire array
///
/// `None` marks an element that is not a map.
pub(crate) fn assemble<E, I>(elements: I, config: &Config) -> Result<Pack, DecodeError>
where
    E: Entry,
    I: IntoIterator<Item = Option<E>>,
{
    let elements = elements.into_iter();
    let capacity = elements.size_hint().0;
    let capacity = config
        .max_records
        .map_or(capacity, |limit| capacity.min(limit));

    let mut pack = Pack {
        base_info: None,
        records: Vec::with_capacity(capacity),
    };

    for (index, element) in elements.enumerate() {
        let entry = element.ok_or(DecodeError::InvalidRecord(index))?;

        if resolve::is_base_entry(&entry) {
            if index == 0 {
                pack.base_info = Some(base_info(&entry)?);
                if !resolve::has_record_fields(&entry) {
                    continue;
                }
            } else {
                tracing::trace!(index, "ignoring base fields outside the first element");
            }
        }

        if let Some(limit) = config.max_records
            && pack.records.len() >= limit
        {
            return Err(DecodeError::TooManyRecords { limit });
        }

        pack.records.push(record(&entry)?);
    }

    Ok(pack)
}

fn base_info<E: Entry>(entry: &E) -> Result<BaseInfo, DecodeError> {
    let version = match entry.unsigned(Label::Version)? {
        Some(version) => match u8::try_from(version) {
            Ok(v) if (1..=SUPPORTED_VERSION).contains(&v) => Some(v),
            _ => return Err(DecodeError::UnsupportedVersion { version }),
        },
        None => None,
    };

    Ok(BaseInfo {
        version,
        base_name: entry.text(Label::BaseName)?,
        base_time: entry.real(Label::BaseTime)?,
        base_unit: entry.text(Label::BaseUnit)?,
        base_value: entry.scalar(Label::BaseValue)?.unwrap_or_default(),
    })
}

fn record<E: Entry>(entry: &E) -> Result<Record, DecodeError> {
    Ok(Record {
        name: entry.text(Label::Name)?,
        unit: entry.text(Label::Unit)?,
        time: entry.real(Label::Time)?,
        update_time: entry.unsigned(Label::UpdateTime)?,
        sum: entry.real(Label::ValueSum)?,
        value: record_value(entry)?,
    })
}

fn record_value<E: Entry>(entry: &E) -> Result<Value, DecodeError> {
    let present = Label::VALUES
        .into_iter()
        .filter(|label| entry.contains(*label))
        .count();
    if present > 1 {
        return Err(DecodeError::AmbiguousValue(entry.index()));
    }

    if let Some(v) = entry.real(Label::Value)? {
        return Ok(Value::Float(v));
    }
    if let Some(b) = entry.boolean(Label::BoolValue)? {
        return Ok(Value::Bool(b));
    }
    if let Some(s) = entry.text(Label::StringValue)? {
        return Ok(Value::String(s));
    }
    if let Some(data) = entry.binary(Label::DataValue)? {
        return Ok(Value::Binary(data));
    }
    Ok(Value::Undefined)
}
