//! Benchmarks for travel plan generation and stage ticking

use bloom_core::{Point, SeededRandom, Size};
use bloom_reactions::{BloomConfig, FloatPathAnimator, Stage};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const BOUNDS: Size = Size::new(390.0, 844.0);
const ORIGIN: Point = Point::new(38.0, 816.0);

fn bench_plan(c: &mut Criterion) {
    let animator = FloatPathAnimator::default();
    let mut rng = SeededRandom::new(42);

    c.bench_function("plan", |b| {
        b.iter(|| animator.plan(&mut rng, black_box(ORIGIN), black_box(36.0), BOUNDS))
    });
}

fn bench_stage_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_tick");

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut stage = Stage::from_config(BOUNDS, &BloomConfig::hearts())
                .expect("default config is valid")
                .with_random(SeededRandom::new(7));
            for _ in 0..count {
                stage.spawn_and_animate(ORIGIN);
            }
            b.iter(|| {
                // Tiny steps so icons stay alive across iterations
                stage.tick(black_box(0.001));
                black_box(stage.frames().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan, bench_stage_tick);
criterion_main!(benches);
