//! JSON representation of SenML packs (RFC 8428 §5)

use std::io;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::{Map, Number, Value as JsonValue};

use crate::config::Config;
use crate::decode;
use crate::encode;
use crate::entry::{self, Entry, EntrySink, Field};
use crate::error::{DecodeError, EncodeError};
use crate::keys::Label;
use crate::pack::Pack;
use crate::record::Value;

/// Content-Type for SenML JSON format
pub const SENML_JSON_CONTENT_TYPE: &str = "application/senml+json";

/// base64url as required for `vd`; padding is accepted but never written
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a SenML pack from JSON text
pub fn decode_json(input: impl AsRef<[u8]>) -> Result<Pack, DecodeError> {
    decode_json_with_config(input, &Config::default())
}

/// Decode a SenML pack from JSON text with explicit settings
pub fn decode_json_with_config(
    input: impl AsRef<[u8]>,
    config: &Config,
) -> Result<Pack, DecodeError> {
    let root: JsonValue = serde_json::from_slice(input.as_ref())?;
    let elements = root.as_array().ok_or(DecodeError::NotAnArray)?;

    let pack = decode::assemble(
        elements.iter().enumerate().map(|(index, element)| {
            element.as_object().map(|map| JsonEntry { index, map })
        }),
        config,
    )?;

    tracing::debug!(
        records = pack.records.len(),
        base_info = pack.base_info.is_some(),
        "decoded SenML JSON pack"
    );
    Ok(pack)
}

/// Encode a SenML pack as compact, ASCII-only JSON text
pub fn encode_json(pack: &Pack) -> Result<String, EncodeError> {
    let bytes = encode_json_bytes(pack)?;
    String::from_utf8(bytes).map_err(|e| EncodeError::serialization(e.to_string()))
}

/// Encode a SenML pack as JSON into `buf`, returning the number of bytes written
pub fn encode_json_into(pack: &Pack, buf: &mut [u8]) -> Result<usize, EncodeError> {
    let bytes = encode_json_bytes(pack)?;
    encode::copy_into(&bytes, buf)
}

fn encode_json_bytes(pack: &Pack) -> Result<Vec<u8>, EncodeError> {
    let elements: Vec<JsonValue> = encode::emit::<JsonSink>(pack)?
        .into_iter()
        .map(|sink| JsonValue::Object(sink.0))
        .collect();
    let root = JsonValue::Array(elements);

    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
    root.serialize(&mut serializer)?;

    tracing::debug!(bytes = out.len(), "encoded SenML JSON pack");
    Ok(out)
}

impl Pack {
    /// Deserialize from JSON text
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        decode_json(json)
    }

    /// Serialize to JSON text
    pub fn to_json(&self) -> Result<String, EncodeError> {
        encode_json(self)
    }
}

struct JsonEntry<'a> {
    index: usize,
    map: &'a Map<String, JsonValue>,
}

impl JsonEntry<'_> {
    fn get<T>(&self, label: Label, convert: impl FnOnce(&JsonValue) -> Option<T>) -> Field<T> {
        match self.map.get(label.json_key()) {
            None => Ok(None),
            Some(value) => convert(value).map(Some).ok_or_else(|| self.invalid(label)),
        }
    }
}

impl Entry for JsonEntry<'_> {
    fn index(&self) -> usize {
        self.index
    }

    fn contains(&self, label: Label) -> bool {
        self.map.contains_key(label.json_key())
    }

    fn text(&self, label: Label) -> Field<String> {
        self.get(label, |v| v.as_str().map(str::to_owned))
    }

    fn real(&self, label: Label) -> Field<f64> {
        self.get(label, JsonValue::as_f64)
    }

    fn unsigned(&self, label: Label) -> Field<u64> {
        self.get(label, |v| {
            v.as_u64().or_else(|| v.as_f64().and_then(entry::whole_seconds))
        })
    }

    fn boolean(&self, label: Label) -> Field<bool> {
        self.get(label, JsonValue::as_bool)
    }

    fn binary(&self, label: Label) -> Field<Vec<u8>> {
        self.get(label, |v| v.as_str().and_then(|s| BASE64URL.decode(s).ok()))
    }

    fn scalar(&self, label: Label) -> Field<Value> {
        self.get(label, |v| match v {
            JsonValue::Number(n) => n.as_f64().map(Value::Float),
            JsonValue::String(s) => Some(Value::String(s.clone())),
            JsonValue::Bool(b) => Some(Value::Bool(*b)),
            _ => None,
        })
    }
}

#[derive(Default)]
struct JsonSink(Map<String, JsonValue>);

impl JsonSink {
    fn insert(&mut self, label: Label, value: JsonValue) {
        self.0.insert(label.json_key().to_owned(), value);
    }
}

impl EntrySink for JsonSink {
    fn text(&mut self, label: Label, value: &str) {
        self.insert(label, JsonValue::String(value.to_owned()));
    }

    fn real(&mut self, label: Label, value: f64) -> Result<(), EncodeError> {
        let number = Number::from_f64(value).ok_or(EncodeError::NonFiniteNumber { label })?;
        self.insert(label, JsonValue::Number(number));
        Ok(())
    }

    fn unsigned(&mut self, label: Label, value: u64) {
        self.insert(label, JsonValue::Number(value.into()));
    }

    fn boolean(&mut self, label: Label, value: bool) {
        self.insert(label, JsonValue::Bool(value));
    }

    fn binary(&mut self, label: Label, value: &[u8]) -> Result<(), EncodeError> {
        if label.is_base() {
            return Err(EncodeError::UnsupportedBaseValue);
        }
        self.insert(label, JsonValue::String(BASE64URL.encode(value)));
        Ok(())
    }
}

/// Compact formatter that escapes every non-ASCII character as `\uXXXX`
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
