//! Criterion benchmarks for recognition against libraries of growing size.
//! Library sizes: {1, 8, 32} gestures of 1–2 strokes each.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use ndollar::synth::{circle, perturb, PerturbCfg, ReplayToken};
use ndollar::{Query, Recognizer, RecognizerCfg, Stroke, StrokeSet};

fn base_shapes() -> Vec<StrokeSet> {
    vec![
        vec![circle(Vector2::new(50.0, 50.0), 50.0, 32)],
        vec![Stroke::from_xy(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)])],
        vec![Stroke::from_xy(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)])],
        vec![
            Stroke::from_xy(&[(0.0, 50.0), (100.0, 50.0)]),
            Stroke::from_xy(&[(50.0, 0.0), (50.0, 100.0)]),
        ],
    ]
}

fn library(size: usize) -> Recognizer {
    let shapes = base_shapes();
    let entries = (0..size).map(|i| {
        let strokes = perturb(
            &shapes[i % shapes.len()],
            PerturbCfg::default(),
            ReplayToken {
                seed: 11,
                index: i as u64,
            },
        );
        (format!("g{i}"), strokes)
    });
    Recognizer::from_templates(RecognizerCfg::default(), entries).unwrap()
}

fn bench_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognize");
    let probe = perturb(
        &base_shapes()[1],
        PerturbCfg::default(),
        ReplayToken { seed: 5, index: 0 },
    );
    for &size in &[1usize, 8, 32] {
        let rec = library(size);
        group.bench_with_input(BenchmarkId::new("library", size), &size, |b, _| {
            b.iter(|| {
                let _res = rec.recognize_strokes(&Query::any(), &probe).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recognize);
criterion_main!(benches);
