//! Format-independent pack emission

use crate::entry::EntrySink;
use crate::error::EncodeError;
use crate::keys::{Label, SUPPORTED_VERSION};
use crate::pack::{BaseInfo, Pack};
use crate::record::Record;

/// Write a pack as a sequence of wire maps
///
/// Absent fields are omitted. Base information with no attribute set is
/// dropped, since an element without base labels decodes as a record.
pub(crate) fn emit<S: EntrySink>(pack: &Pack) -> Result<Vec<S>, EncodeError> {
    let mut entries = Vec::with_capacity(pack.records.len() + 1);

    match &pack.base_info {
        Some(base) if base.is_empty() => {
            tracing::debug!("omitting base information with no attributes set");
        }
        Some(base) => entries.push(base_info(base)?),
        None => {}
    }

    for record in &pack.records {
        entries.push(self::record(record)?);
    }

    Ok(entries)
}

fn base_info<S: EntrySink>(base: &BaseInfo) -> Result<S, EncodeError> {
    let mut sink = S::default();
    if let Some(version) = base.wire_version() {
        if version > SUPPORTED_VERSION {
            return Err(EncodeError::UnsupportedVersion { version });
        }
        sink.unsigned(Label::Version, u64::from(version));
    }
    if let Some(name) = &base.base_name {
        sink.text(Label::BaseName, name);
    }
    if let Some(time) = base.base_time {
        sink.real(Label::BaseTime, time)?;
    }
    if let Some(unit) = &base.base_unit {
        sink.text(Label::BaseUnit, unit);
    }
    sink.value(Label::BaseValue, &base.base_value)?;
    Ok(sink)
}

fn record<S: EntrySink>(record: &Record) -> Result<S, EncodeError> {
    let mut sink = S::default();
    if let Some(name) = &record.name {
        sink.text(Label::Name, name);
    }
    if let Some(unit) = &record.unit {
        sink.text(Label::Unit, unit);
    }
    if let Some(label) = record.value.label() {
        sink.value(label, &record.value)?;
    }
    if let Some(sum) = record.sum {
        sink.real(Label::ValueSum, sum)?;
    }
    if let Some(time) = record.time {
        sink.real(Label::Time, time)?;
    }
    if let Some(update_time) = record.update_time {
        sink.unsigned(Label::UpdateTime, update_time);
    }
    Ok(sink)
}

/// Copy encoded bytes into a caller-supplied buffer
pub(crate) fn copy_into(encoded: &[u8], buf: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = encoded.len();
    match buf.get_mut(..needed) {
        Some(target) => {
            target.copy_from_slice(encoded);
            Ok(needed)
        }
        None => Err(EncodeError::BufferTooSmall {
            needed,
            available: buf.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_into() {
        let mut buf = [0u8; 4];
        assert_eq!(copy_into(b"abc", &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"abc");
        assert_eq!(
            copy_into(b"abcdef", &mut buf),
            Err(EncodeError::BufferTooSmall {
                needed: 6,
                available: 4
            })
        );
    }
}
