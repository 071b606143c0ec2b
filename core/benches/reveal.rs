use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;
use web_time::Instant;

fn first_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_open");

    for preset in Preset::ALL {
        let config = preset.config();
        group.bench_function(preset.name(), |b| {
            let mut seed = 0;
            b.iter_batched(
                || {
                    seed += 1;
                    (PlayEngine::new(config), RandomMinefieldGenerator::new(seed))
                },
                |(mut engine, mut generator)| {
                    black_box(engine.open((0, 0), &mut generator, Instant::now()))
                },
                BatchSize::SmallInput,
            );
        });
    }

    // flood across a huge empty board, bounded by rows*cols iterations
    let config = GameConfig::new_unchecked((255, 255), 0);
    group.bench_function("empty_255x255", |b| {
        b.iter_batched(
            || PlayEngine::new(config),
            |mut engine| {
                black_box(engine.open(
                    (127, 127),
                    &mut FixedMinefieldGenerator::default(),
                    Instant::now(),
                ))
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, first_open);
criterion_main!(benches);
