use cornerpick::{extract_corners, ExtractConfig, ResponseView};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_response(rows: usize, cols: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for y in 0..rows {
        for x in 0..cols {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as f32 / 255.0 - 0.5);
        }
    }
    data
}

fn bench_extract(c: &mut Criterion) {
    let rows = 480;
    let cols = 640;
    let data = make_response(rows, cols);
    let view = ResponseView::from_slice(&data, rows, cols).unwrap();

    c.bench_function("extract_top500", |b| {
        b.iter(|| black_box(extract_corners(view, Some(500), 0.25)));
    });

    c.bench_function("extract_unbounded", |b| {
        b.iter(|| black_box(extract_corners(view, None, 0.25)));
    });

    if cfg!(feature = "rayon") {
        let cfg = ExtractConfig {
            count: Some(500),
            threshold: 0.25f32,
            parallel: true,
        };
        c.bench_function("extract_top500_parallel", |b| {
            b.iter(|| black_box(cfg.extract(view)));
        });
    }
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
