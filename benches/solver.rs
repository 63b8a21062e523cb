use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ballpit::config::seed_bodies;
use ballpit::physics::{BodyStore, WorldBounds};

fn bench_step(c: &mut Criterion) {
    let bounds = WorldBounds::new(800.0, 600.0);
    let mut group = c.benchmark_group("step");

    let reference = BodyStore::new(seed_bodies()).expect("seed bodies are valid");
    group.bench_function("reference_scenario", |b| {
        let mut store = reference.clone();
        b.iter(|| black_box(store.step(bounds)))
    });

    for n in [16usize, 64, 256] {
        let scattered = BodyStore::scatter(n, bounds, 7).expect("scatter");
        group.bench_with_input(BenchmarkId::new("scattered", n), &scattered, |b, s| {
            let mut store = s.clone();
            b.iter(|| black_box(store.step(bounds)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
