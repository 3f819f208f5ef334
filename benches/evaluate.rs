// Day cycle evaluation benchmarks
//
// Evaluation runs once per rendered frame, so it should stay in the
// sub-microsecond range even with dense curves.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use day_cycle::lighting::{Curve, CurveKey};
use day_cycle::{DayCycleConfig, DayPhaseModel, TimeOfDay};

const KEY_COUNTS: &[usize] = &[3, 32, 256];

fn dense_curve(keys: usize) -> Curve {
    let keys = (0..keys)
        .map(|i| {
            let time = i as f32 / keys.max(1) as f32;
            CurveKey::new(time, (time * std::f32::consts::PI).sin())
        })
        .collect();
    Curve::hermite(keys)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &keys in KEY_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(keys), &keys, |b, &keys| {
            let config = DayCycleConfig {
                sun_intensity: dense_curve(keys),
                moon_intensity: dense_curve(keys),
                ..Default::default()
            };
            let model = DayPhaseModel::new(config).expect("valid config");
            let mut time = TimeOfDay::new(0.0);
            b.iter(|| {
                model.advance(&mut time, black_box(0.016));
                black_box(model.evaluate(time))
            });
        });
    }

    group.finish();
}

fn bench_resolve_phase(c: &mut Criterion) {
    let model = DayPhaseModel::new(DayCycleConfig::default()).expect("valid config");
    c.bench_function("resolve_phase", |b| {
        b.iter(|| model.resolve_phase(black_box(TimeOfDay::new(0.9))))
    });
}

criterion_group!(benches, bench_evaluate, bench_resolve_phase);
criterion_main!(benches);
