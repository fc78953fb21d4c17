#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to the same pack
    if let Ok(pack) = senml_codec::decode_json(data) {
        if let Ok(json) = senml_codec::encode_json(&pack) {
            let again = senml_codec::decode_json(&json).expect("re-encoded JSON must decode");
            assert_eq!(again, pack);
        }
    }
});
