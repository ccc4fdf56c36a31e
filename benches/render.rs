use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rm4scc::encode;
use rm4scc::render::{RenderConfig, layout, rasterize, to_ascii};
use std::collections::BTreeSet;

fn bench_layout(c: &mut Criterion) {
    let barcode = encode("LU178XE", "2B").barcode;
    let flagged = BTreeSet::new();
    c.bench_function("layout_42", |b| {
        b.iter(|| layout(black_box(&barcode), black_box(&flagged)))
    });
}

fn bench_ascii(c: &mut Criterion) {
    let slots = layout(&encode("LU178XE", "2B").barcode, &BTreeSet::new());
    c.bench_function("ascii_42", |b| b.iter(|| to_ascii(black_box(&slots))));
}

fn bench_rasterize(c: &mut Criterion) {
    let slots = layout(&encode("LU178XE", "2B").barcode, &BTreeSet::new());
    let small = RenderConfig::default();
    let large = RenderConfig {
        bar_width: 16,
        bar_gap: 12,
        row_height: 64,
        quiet_zone: 32,
    };
    c.bench_function("rasterize_default", |b| {
        b.iter(|| rasterize(black_box(&slots), black_box(&small)))
    });
    c.bench_function("rasterize_large", |b| {
        b.iter(|| rasterize(black_box(&slots), black_box(&large)))
    });
}

criterion_group!(benches, bench_layout, bench_ascii, bench_rasterize);
criterion_main!(benches);
