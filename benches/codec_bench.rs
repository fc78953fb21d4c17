use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use senml_codec::{Pack, PackBuilder, decode_cbor, decode_json, encode_cbor, encode_json};

fn sample_pack(records: usize) -> Pack {
    (0..records)
        .fold(
            PackBuilder::new()
                .base_name("urn:dev:ow:10e2073a01080063:")
                .base_time(1_320_067_464.0)
                .base_unit("%RH"),
            |builder, i| builder.add_measurement("humidity", 20.0 + i as f64 / 10.0, i as f64),
        )
        .build()
}

fn codec_benchmark(c: &mut Criterion) {
    let pack = sample_pack(64);
    let json = encode_json(&pack).unwrap();
    let cbor = encode_cbor(&pack).unwrap();

    c.bench_function("encode_json", |b| b.iter(|| encode_json(black_box(&pack))));
    c.bench_function("decode_json", |b| b.iter(|| decode_json(black_box(&json))));
    c.bench_function("encode_cbor", |b| b.iter(|| encode_cbor(black_box(&pack))));
    c.bench_function("decode_cbor", |b| b.iter(|| decode_cbor(black_box(&cbor))));
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
