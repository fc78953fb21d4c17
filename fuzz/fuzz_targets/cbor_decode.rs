#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pack) = senml_codec::decode_cbor(data) {
        let cbor = senml_codec::encode_cbor(&pack).expect("decoded pack must encode");
        let again = senml_codec::decode_cbor(&cbor).expect("re-encoded CBOR must decode");
        // NaN never compares equal, so only the shape is checked
        assert_eq!(again.records.len(), pack.records.len());
        assert_eq!(again.base_info.is_some(), pack.base_info.is_some());
    }
});
