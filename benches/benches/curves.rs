// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use segue_geometry::{EdgeSet, FrictionCurve, LayoutDirection};
use segue_gesture::VelocityTracker;
use segue_transition::TimingCurve;

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("segue_curves");

    let samples: Vec<f64> = (0..1000).map(|i| f64::from(i) / 1000.0).collect();

    for (name, curve) in [
        ("ease_in_out", TimingCurve::EaseInOut),
        ("critically_damped", TimingCurve::CRITICALLY_DAMPED),
        ("bouncy_spring", TimingCurve::spring(0.5, 4.0)),
    ] {
        group.bench_function(format!("timing_curve({name})"), |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for &f in &samples {
                    sum += curve.progress(black_box(f), 0.35);
                }
                black_box(sum)
            });
        });
    }

    group.bench_function("friction", |b| {
        let friction = FrictionCurve::default();
        b.iter(|| {
            let mut sum = Vec2::ZERO;
            for &f in &samples {
                sum += friction.apply_vec(black_box(Vec2::new(f * -300.0, f * 40.0)));
            }
            black_box(sum)
        });
    });

    group.bench_function("edge_progress(all)", |b| {
        let size = Size::new(390.0, 844.0);
        b.iter(|| {
            let mut best = 0.0;
            for &f in &samples {
                let t = Vec2::new(f * 200.0 - 100.0, f * 600.0);
                if let Some((_, p)) =
                    EdgeSet::ALL.max_progress(black_box(t), size, LayoutDirection::LeftToRight)
                {
                    best += p;
                }
            }
            black_box(best)
        });
    });

    group.bench_function("velocity_tracker", |b| {
        b.iter(|| {
            let mut tracker = VelocityTracker::new();
            for (i, &f) in samples.iter().enumerate().take(120) {
                tracker.add_position(i as f64 / 120.0, Point::new(0.0, f * 800.0));
            }
            black_box(tracker.velocity())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
