// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use mandelbrot::{escape_time, EscapeTimeRenderer, Viewport};
use num::Complex;

// A point near the seahorse valley that takes most of its budget to
// escape, so the loop body dominates the measurement.
fn point(c: &mut Criterion) {
    c.bench_function("escape_time slow point", |b| {
        b.iter(|| escape_time(Complex::new(-0.745, 0.113), 1000))
    });
}

fn frame(c: &mut Criterion) {
    c.bench_function("render 320x240", |b| {
        let viewport = Viewport::new(-2.0, -1.5, 1.0, 1.5).unwrap();
        let renderer = EscapeTimeRenderer::new(320, 240, viewport, 200).unwrap();
        let mut counts = vec![0; renderer.len()];
        b.iter(|| renderer.render(&mut counts).unwrap())
    });
}

fn frame_threaded(c: &mut Criterion) {
    c.bench_function("render 320x240, four bands", |b| {
        let viewport = Viewport::new(-2.0, -1.5, 1.0, 1.5).unwrap();
        let renderer = EscapeTimeRenderer::new(320, 240, viewport, 200).unwrap();
        let mut counts = vec![0; renderer.len()];
        b.iter(|| renderer.render_threaded(&mut counts, 4).unwrap())
    });
}

criterion_group!(benches, point, frame, frame_threaded);
criterion_main!(benches);
