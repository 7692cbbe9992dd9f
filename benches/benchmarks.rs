//! Benchmarks for meanstd
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use meanstd::statistics::{calculate_mean_and_standard_deviation, StdDevCalculator};

fn bench_mean_and_stddev(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_and_stddev");

    for size in [16usize, 1_000, 100_000] {
        let floats: Vec<f64> = (0..size).map(|i| (i as f64).sin() * 100.0).collect();
        let ints: Vec<i32> = (0..size as i32).map(|i| i.wrapping_mul(7919) % 1000).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("f64_alloc", size), &floats, |b, data| {
            b.iter(|| calculate_mean_and_standard_deviation(black_box(data), true, None).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("f64_scratch", size), &floats, |b, data| {
            let mut scratch = Vec::with_capacity(size);
            b.iter(|| {
                calculate_mean_and_standard_deviation(black_box(data), true, Some(&mut scratch))
                    .unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("i32_calculator", size), &ints, |b, data| {
            let mut calc = StdDevCalculator::new();
            b.iter(|| calc.calculate(black_box(data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mean_and_stddev);
criterion_main!(benches);
