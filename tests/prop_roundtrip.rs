use proptest::prelude::*;
use senml_codec::{BaseInfo, Pack, Record, Value, decode_cbor, decode_json, encode_cbor, encode_json};

// Quarter steps keep decimal renderings short and exact
fn real() -> impl Strategy<Value = f64> {
    (-4_000_000_000i64..4_000_000_000).prop_map(|n| n as f64 / 4.0)
}

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,12}"
}

fn value(with_binary: bool) -> BoxedStrategy<Value> {
    let scalar = prop_oneof![
        Just(Value::Undefined),
        real().prop_map(Value::Float),
        text().prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
    ];
    if with_binary {
        prop_oneof![
            scalar,
            prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Binary),
        ]
        .boxed()
    } else {
        scalar.boxed()
    }
}

fn base_info(with_binary: bool) -> impl Strategy<Value = BaseInfo> {
    (
        prop::option::of(1u8..=5),
        text(),
        prop::option::of(real()),
        prop::option::of(text()),
        value(with_binary),
    )
        .prop_map(|(version, base_name, base_time, base_unit, base_value)| BaseInfo {
            version,
            base_name: Some(base_name),
            base_time,
            base_unit,
            base_value,
        })
}

fn record() -> impl Strategy<Value = Record> {
    (
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(real()),
        prop::option::of(any::<u64>()),
        prop::option::of(real()),
        value(true),
    )
        .prop_map(|(name, unit, time, update_time, sum, value)| Record {
            name,
            unit,
            time,
            update_time,
            sum,
            value,
        })
}

fn pack(base_binary: bool) -> impl Strategy<Value = Pack> {
    (
        prop::option::of(base_info(base_binary)),
        prop::collection::vec(record(), 0..8),
    )
        .prop_map(|(base_info, records)| Pack { base_info, records })
}

proptest! {
    #[test]
    fn prop_json_roundtrip(pack in pack(false)) {
        let json = encode_json(&pack).unwrap();
        prop_assert!(json.is_ascii());
        prop_assert_eq!(decode_json(&json).unwrap(), pack);
    }

    #[test]
    fn prop_cbor_roundtrip(pack in pack(true)) {
        let cbor = encode_cbor(&pack).unwrap();
        prop_assert_eq!(decode_cbor(&cbor).unwrap(), pack);
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode_cbor(&bytes);
        let _ = decode_json(&bytes);
    }
}
