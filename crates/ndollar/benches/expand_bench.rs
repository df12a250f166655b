//! Criterion benchmarks for template expansion (M!·2^M variants per gesture).
//! Focus sizes: M in {1, 2, 3, 4}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ndollar::expand::expand;
use ndollar::{RecognizerCfg, Stroke, StrokeSet};

fn strokes(m: usize) -> StrokeSet {
    (0..m)
        .map(|k| {
            let y = 25.0 * k as f64;
            Stroke::from_xy(&[(0.0, y), (60.0, y + 10.0), (100.0, y)])
        })
        .collect()
}

fn bench_expand(c: &mut Criterion) {
    let cfg = RecognizerCfg::default();
    let mut group = c.benchmark_group("expand");
    for &m in &[1usize, 2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("strokes", m), &m, |b, &m| {
            b.iter_batched(
                || strokes(m),
                |s| {
                    let _t = expand(&s, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expand);
criterion_main!(benches);
