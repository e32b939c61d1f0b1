//! Criterion benchmarks for the hull walk.
//! Focus sizes: n in {8, 64, 256, 1024}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use giftwrap::rand::{draw_point_cloud, PointCount, ReplayToken, ScatterCfg};
use giftwrap::{compute_hull, HullCfg};

fn cloud(n: usize, seed: u64) -> Vec<giftwrap::Vec2<f64>> {
    draw_point_cloud(
        ScatterCfg {
            point_count: PointCount::Fixed(n),
            radius: 1.0,
        },
        ReplayToken { seed, index: 0 },
    )
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[8usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("compute_hull", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _hull = compute_hull(&pts, HullCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
