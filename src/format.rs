//! Wire format selection by CoAP Content-Format or media type

use crate::error::{DecodeError, EncodeError};
use crate::pack::Pack;
use crate::{cbor, json};

/// SenML Content-Format identifiers for CoAP
pub mod content_format {
    /// application/senml+json
    pub const SENML_JSON: u16 = 110;
    /// application/senml+cbor
    pub const SENML_CBOR: u16 = 112;
}

/// A SenML wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Cbor,
}

impl Format {
    /// Look up a format by CoAP Content-Format number
    pub fn from_content_format(id: u16) -> Option<Self> {
        match id {
            content_format::SENML_JSON => Some(Format::Json),
            content_format::SENML_CBOR => Some(Format::Cbor),
            _ => None,
        }
    }

    /// Look up a format by media type, ignoring any parameters
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(json::SENML_JSON_CONTENT_TYPE) {
            Some(Format::Json)
        } else if essence.eq_ignore_ascii_case(cbor::SENML_CBOR_CONTENT_TYPE) {
            Some(Format::Cbor)
        } else {
            None
        }
    }

    pub fn content_format(self) -> u16 {
        match self {
            Format::Json => content_format::SENML_JSON,
            Format::Cbor => content_format::SENML_CBOR,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Format::Json => json::SENML_JSON_CONTENT_TYPE,
            Format::Cbor => cbor::SENML_CBOR_CONTENT_TYPE,
        }
    }

    /// Decode a pack in this format
    pub fn decode(self, input: &[u8]) -> Result<Pack, DecodeError> {
        match self {
            Format::Json => json::decode_json(input),
            Format::Cbor => cbor::decode_cbor(input),
        }
    }

    /// Encode a pack in this format
    pub fn encode(self, pack: &Pack) -> Result<Vec<u8>, EncodeError> {
        match self {
            Format::Json => json::encode_json(pack).map(String::into_bytes),
            Format::Cbor => cbor::encode_cbor(pack),
        }
    }
}
