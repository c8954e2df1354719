// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use segue_gesture::{PanState, TOUCH_SLOP};
use segue_presentation::{
    CardPolicy, ContainerMetrics, InteractivePresentationController, MatchedGeometryPolicy,
    PresentationHost, PresentationId, PresentationPolicy, ScrollViewState, SlidePolicy,
    SurfaceFrame, Transaction, TransitionDescriptor, ViewId,
};

/// Keeps the last surface so the work is not optimized away.
#[derive(Default)]
struct SinkHost {
    last: Option<SurfaceFrame>,
    list: Option<ScrollViewState>,
}

impl PresentationHost for SinkHost {
    fn apply_surface(&mut self, _: PresentationId, surface: &SurfaceFrame) {
        self.last = Some(*surface);
    }

    fn scroll_view(&self, _: ViewId) -> Option<ScrollViewState> {
        self.list
    }

    fn set_content_offset(&mut self, _: ViewId, offset: Vec2) {
        if let Some(list) = self.list.as_mut() {
            list.content_offset = offset;
        }
    }
}

fn metrics() -> ContainerMetrics {
    ContainerMetrics::new(Rect::new(0.0, 0.0, 390.0, 844.0))
}

fn engine<P: PresentationPolicy>(
    policy: P,
    host: &mut SinkHost,
) -> InteractivePresentationController<P> {
    let mut engine = InteractivePresentationController::new(
        PresentationId(1),
        TransitionDescriptor::default(),
        policy,
        metrics(),
    )
    .expect("valid configuration");
    engine.present(host, Transaction::immediate());
    engine
}

/// One drag of `frames` samples down the screen, released and settled.
fn drag<P: PresentationPolicy>(
    engine: &mut InteractivePresentationController<P>,
    host: &mut SinkHost,
    frames: u32,
    scroll: bool,
) {
    let mut pan = PanState::new(TOUCH_SLOP);
    let start = Point::new(195.0, 300.0);
    pan.press(start, 0.0);
    if scroll {
        engine.gesture_should_recognize_simultaneously(ViewId(1));
    }
    let step = 500.0 / f64::from(frames);
    let mut t = 0.0;
    let mut y = start.y;
    for _ in 0..frames {
        t += 1.0 / 120.0;
        y += step;
        if let Some(event) = pan.update(Point::new(start.x, y), t) {
            engine.handle_pan(host, &event);
        }
    }
    if let Some(event) = pan.release(Point::new(start.x, y), t) {
        engine.handle_pan(host, &event);
    }
    while engine.is_settling() {
        t += 1.0 / 120.0;
        engine.advance(host, t);
    }
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("segue_presentation");
    group.sample_size(50);

    for frames in [30_u32, 240] {
        group.bench_function(format!("slide_drag(frames={frames})"), |b| {
            b.iter_batched(
                || {
                    let mut host = SinkHost::default();
                    let engine = engine(SlidePolicy::default(), &mut host);
                    (engine, host)
                },
                |(mut engine, mut host)| {
                    drag(&mut engine, &mut host, frames, false);
                    black_box(host.last);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("card_drag_with_scroll(frames={frames})"), |b| {
            b.iter_batched(
                || {
                    let mut host = SinkHost {
                        list: Some(ScrollViewState::new(
                            Vec2::new(0.0, 200.0),
                            Size::new(390.0, 2000.0),
                            Size::new(390.0, 700.0),
                        )),
                        ..SinkHost::default()
                    };
                    let engine = engine(CardPolicy::default(), &mut host);
                    (engine, host)
                },
                |(mut engine, mut host)| {
                    drag(&mut engine, &mut host, frames, true);
                    black_box(host.last);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("zoom_drag(frames={frames})"), |b| {
            let source = Rect::new(20.0, 120.0, 180.0, 240.0);
            b.iter_batched(
                || {
                    let mut host = SinkHost::default();
                    let engine = engine(MatchedGeometryPolicy::new(source), &mut host);
                    (engine, host)
                },
                |(mut engine, mut host)| {
                    drag(&mut engine, &mut host, frames, false);
                    black_box(host.last);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
