use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use numeric_processing::processing::{transform, DataProcessor};
use numeric_processing::types::Number;

fn bench_transform(c: &mut Criterion) {
    c.bench_function("transform_fixed_triple", |b| {
        b.iter(|| {
            transform(
                black_box(Number::Int64(5)),
                black_box(Number::Int64(3)),
                black_box(Number::Int64(2)),
            )
            .unwrap()
        })
    });
}

fn bench_process_and_stats(c: &mut Criterion) {
    c.bench_function("process_and_stats_1k", |b| {
        b.iter(|| {
            let mut processor = DataProcessor::new("bench");
            for i in 0..1_000i64 {
                processor.add(Number::Int64(black_box(i % 40 - 10)));
            }
            processor.process().unwrap();
            processor.stats()
        })
    });
}

criterion_group!(benches, bench_transform, bench_process_and_stats);
criterion_main!(benches);
