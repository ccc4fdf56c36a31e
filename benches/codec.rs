use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rm4scc::{decode, encode};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_7_char_postcode", |b| {
        b.iter(|| encode(black_box("LU178XE"), black_box("2B")))
    });
}

fn bench_decode_valid(c: &mut Criterion) {
    let barcode = encode("LU178XE", "2B").barcode;
    c.bench_function("decode_valid_42", |b| b.iter(|| decode(black_box(&barcode))));
}

fn bench_decode_damaged(c: &mut Criterion) {
    // Every quad breaks the 2-of-4 rule
    let barcode = format!("A{}F", "TTTT".repeat(10));
    c.bench_function("decode_damaged_42", |b| b.iter(|| decode(black_box(&barcode))));
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_5_char_postcode", |b| {
        b.iter(|| {
            let encoded = encode(black_box("AB12C"), black_box("3D"));
            decode(&encoded.barcode)
        })
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode_valid,
    bench_decode_damaged,
    bench_round_trip
);
criterion_main!(benches);
