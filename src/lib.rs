//! # senml-codec - SenML packs in JSON and CBOR
//!
//! A codec for [RFC 8428](https://tools.ietf.org/html/rfc8428) Sensor
//! Measurement Lists (SenML). It maps the JSON array-of-objects form and the
//! CBOR array-of-maps form onto one in-memory [`Pack`].
//!
//! ## Quick Start
//!
//! ```rust
//! use senml_codec::{decode_json, encode_cbor, decode_cbor, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pack = decode_json(r#"[{"bn":"dev/","n":"temp","v":21.5}]"#)?;
//! assert_eq!(pack.records[0].value, Value::Float(21.5));
//!
//! let cbor = encode_cbor(&pack)?;
//! assert_eq!(decode_cbor(&cbor)?, pack);
//!
//! let resolved = pack.resolve();
//! assert_eq!(resolved[0].name.as_deref(), Some("dev/temp"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Data Model
//!
//! - **Base information** (`bver`, `bn`, `bt`, `bu`, `bv`) comes from the
//!   first element of a pack and applies to every record.
//! - **Records** (`n`, `u`, `v`, `vs`, `vb`, `vd`, `s`, `t`, `ut`) are kept
//!   exactly as they appear on the wire. [`Pack::resolve`] yields the
//!   effective names, times and units without modifying the pack.

pub mod builder;
pub mod config;
mod decode;
mod encode;
mod entry;
pub mod error;
pub mod keys;
pub mod pack;
pub mod record;
pub mod resolve;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "cbor")]
pub mod cbor;

#[cfg(all(feature = "json", feature = "cbor"))]
pub mod format;

pub use builder::PackBuilder;
pub use config::Config;
pub use error::{DecodeError, EncodeError, Position};
pub use keys::{Label, SUPPORTED_VERSION};
pub use pack::{BaseInfo, Pack, format_pack};
pub use record::{Record, Value};
pub use resolve::ResolvedRecord;

#[cfg(feature = "json")]
pub use json::{decode_json, decode_json_with_config, encode_json, encode_json_into};

#[cfg(feature = "cbor")]
pub use cbor::{decode_cbor, decode_cbor_with_config, encode_cbor, encode_cbor_into};

#[cfg(all(feature = "json", feature = "cbor"))]
pub use format::Format;
