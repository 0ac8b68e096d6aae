use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kselect::{kth_largest_with, PivotPolicy};
use rand::Rng;
use std::hint::black_box;

fn benchmark_kth_largest(c: &mut Criterion) {
    let sizes = vec![100usize, 1_000, 10_000, 100_000];
    let policies = [
        ("random", PivotPolicy::Random),
        ("seeded", PivotPolicy::Seeded(17)),
        ("middle", PivotPolicy::Middle),
        ("last", PivotPolicy::Last),
    ];
    let mut rng = rand::thread_rng();

    for size in sizes {
        let data: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
        let k = size / 2;

        let mut group = c.benchmark_group(format!("kth_largest_size_{}", size));

        for (name, policy) in policies {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter_batched_ref(
                    || data.clone(),
                    |v| black_box(kth_largest_with(v, k, policy)),
                    criterion::BatchSize::SmallInput,
                );
            });
        }

        group.bench_with_input(BenchmarkId::new("std_select_nth_unstable", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |v| {
                    let idx = v.len() - 1 - k;
                    black_box(*v.select_nth_unstable(idx).1)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_kth_largest);
criterion_main!(benches);
