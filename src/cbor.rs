//! CBOR representation of SenML packs (RFC 8428 §6)
//!
//! A pack is an array of maps keyed by small integers. Record labels use
//! non-negative keys, base labels use negative keys.

use ciborium::value::{Integer, Value as CborValue};

use crate::config::Config;
use crate::decode;
use crate::encode;
use crate::entry::{self, Entry, EntrySink, Field};
use crate::error::{DecodeError, EncodeError};
use crate::keys::Label;
use crate::pack::Pack;
use crate::record::Value;

/// Content-Type for SenML CBOR format
pub const SENML_CBOR_CONTENT_TYPE: &str = "application/senml+cbor";

/// Decode a SenML pack from CBOR bytes
pub fn decode_cbor(input: &[u8]) -> Result<Pack, DecodeError> {
    decode_cbor_with_config(input, &Config::default())
}

/// Decode a SenML pack from CBOR bytes with explicit settings
pub fn decode_cbor_with_config(input: &[u8], config: &Config) -> Result<Pack, DecodeError> {
    let root: CborValue = ciborium::de::from_reader(input)?;
    let elements = root.as_array().ok_or(DecodeError::NotAnArray)?;

    let pack = decode::assemble(
        elements
            .iter()
            .enumerate()
            .map(|(index, element)| element.as_map().map(|map| CborEntry { index, map })),
        config,
    )?;

    tracing::debug!(
        records = pack.records.len(),
        base_info = pack.base_info.is_some(),
        "decoded SenML CBOR pack"
    );
    Ok(pack)
}

/// Encode a SenML pack as CBOR bytes
pub fn encode_cbor(pack: &Pack) -> Result<Vec<u8>, EncodeError> {
    let elements: Vec<CborValue> = encode::emit::<CborSink>(pack)?
        .into_iter()
        .map(|sink| CborValue::Map(sink.0))
        .collect();

    let mut buffer = Vec::new();
    ciborium::ser::into_writer(&CborValue::Array(elements), &mut buffer)?;

    tracing::debug!(bytes = buffer.len(), "encoded SenML CBOR pack");
    Ok(buffer)
}

/// Encode a SenML pack as CBOR into `buf`, returning the number of bytes written
pub fn encode_cbor_into(pack: &Pack, buf: &mut [u8]) -> Result<usize, EncodeError> {
    let bytes = encode_cbor(pack)?;
    encode::copy_into(&bytes, buf)
}

impl Pack {
    /// Deserialize from CBOR bytes
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_cbor(bytes)
    }

    /// Serialize to CBOR bytes
    pub fn to_cbor(&self) -> Result<Vec<u8>, EncodeError> {
        encode_cbor(self)
    }
}

fn is_key(key: &CborValue, label: Label) -> bool {
    match key {
        CborValue::Integer(i) => i128::from(*i) == i128::from(label.cbor_key()),
        _ => false,
    }
}

struct CborEntry<'a> {
    index: usize,
    map: &'a [(CborValue, CborValue)],
}

impl CborEntry<'_> {
    fn get<T>(&self, label: Label, convert: impl FnOnce(&CborValue) -> Option<T>) -> Field<T> {
        // A repeated key resolves to its last entry, as JSON objects do
        match self.map.iter().rev().find(|(key, _)| is_key(key, label)) {
            None => Ok(None),
            Some((_, value)) => convert(value).map(Some).ok_or_else(|| self.invalid(label)),
        }
    }
}

fn as_real(value: &CborValue) -> Option<f64> {
    match value {
        CborValue::Float(f) => Some(*f),
        CborValue::Integer(i) => Some(i128::from(*i) as f64),
        _ => None,
    }
}

impl Entry for CborEntry<'_> {
    fn index(&self) -> usize {
        self.index
    }

    fn contains(&self, label: Label) -> bool {
        self.map.iter().any(|(key, _)| is_key(key, label))
    }

    fn text(&self, label: Label) -> Field<String> {
        self.get(label, |v| v.as_text().map(str::to_owned))
    }

    fn real(&self, label: Label) -> Field<f64> {
        self.get(label, as_real)
    }

    fn unsigned(&self, label: Label) -> Field<u64> {
        self.get(label, |v| match v {
            CborValue::Integer(i) => u64::try_from(*i).ok(),
            CborValue::Float(f) => entry::whole_seconds(*f),
            _ => None,
        })
    }

    fn boolean(&self, label: Label) -> Field<bool> {
        self.get(label, CborValue::as_bool)
    }

    fn binary(&self, label: Label) -> Field<Vec<u8>> {
        self.get(label, |v| v.as_bytes().cloned())
    }

    fn scalar(&self, label: Label) -> Field<Value> {
        self.get(label, |v| match v {
            CborValue::Text(s) => Some(Value::String(s.clone())),
            CborValue::Bool(b) => Some(Value::Bool(*b)),
            CborValue::Bytes(data) => Some(Value::Binary(data.clone())),
            other => as_real(other).map(Value::Float),
        })
    }
}

#[derive(Default)]
struct CborSink(Vec<(CborValue, CborValue)>);

impl CborSink {
    fn insert(&mut self, label: Label, value: CborValue) {
        let key = CborValue::Integer(Integer::from(label.cbor_key()));
        self.0.push((key, value));
    }
}

impl EntrySink for CborSink {
    fn text(&mut self, label: Label, value: &str) {
        self.insert(label, CborValue::Text(value.to_owned()));
    }

    fn real(&mut self, label: Label, value: f64) -> Result<(), EncodeError> {
        self.insert(label, CborValue::Float(value));
        Ok(())
    }

    fn unsigned(&mut self, label: Label, value: u64) {
        self.insert(label, CborValue::Integer(Integer::from(value)));
    }

    fn boolean(&mut self, label: Label, value: bool) {
        self.insert(label, CborValue::Bool(value));
    }

    fn binary(&mut self, label: Label, value: &[u8]) -> Result<(), EncodeError> {
        self.insert(label, CborValue::Bytes(value.to_vec()));
        Ok(())
    }
}
