//! Performance benchmarks for carousel-core.

use carousel_core::{display_order, Config, Engine, Inputs};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_display_order(c: &mut Criterion) {
    c.bench_function("display_order_1k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for i in 0..1000 {
                acc += display_order(black_box(i), black_box(700), black_box(1000));
            }
            acc
        })
    });
}

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    group.bench_function("slide_and_update_256", |b| {
        let mut eng = Engine::new(Config::default());
        b.iter(|| {
            eng.advance(black_box(256)).expect("non-empty ring");
            let out = eng.update(black_box(60.0), Inputs::default(), black_box(256));
            black_box(out.directives.len())
        })
    });

    group.bench_function("idle_update_256", |b| {
        let mut eng = Engine::new(Config::default());
        b.iter(|| {
            let out = eng.update(black_box(16.0), Inputs::default(), black_box(256));
            black_box(out.directives.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_display_order, bench_engine_step);
criterion_main!(benches);
