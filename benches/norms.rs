//! Benchmarks for single-vector norms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pairwise::StdNorm;
use rand::prelude::*;

fn random_vec(n: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_norms(c: &mut Criterion) {
    for kind in StdNorm::ALL {
        let mut group = c.benchmark_group(format!("norm_{}", kind.name().to_lowercase()));
        let f = kind.func32();

        for dim in [128, 768, 1536] {
            let v = random_vec(dim);

            group.throughput(Throughput::Elements(dim as u64));
            group.bench_with_input(BenchmarkId::new("f32", dim), &dim, |bench, _| {
                bench.iter(|| f(black_box(&v)))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_norms);
criterion_main!(benches);
