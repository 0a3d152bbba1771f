//! Benchmark for framebuffer operations.

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use coffee_viz::color::Rgba;
use coffee_viz::framebuffer::Framebuffer;
use coffee_viz::render::fill_vertical_gradient;

fn framebuffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for (width, height) in [(1000, 700), (1920, 1080)] {
        let mut fb = Framebuffer::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| fb.clear(black_box(Rgba::rgb(26, 26, 46))));
            },
        );
    }

    group.finish();
}

fn framebuffer_blend_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_blend");

    let mut fb = Framebuffer::new(1000, 700).unwrap();
    fb.clear(Rgba::BLACK);
    let bar_row = Rgba::new(232, 180, 76, 180);

    group.bench_function("blend_span_opaque_1000x700", |b| {
        b.iter(|| {
            for y in 0..700 {
                fb.blend_span(0, 1000, black_box(y), bar_row);
            }
        });
    });

    group.bench_function("vertical_gradient_1000x700", |b| {
        b.iter(|| fill_vertical_gradient(&mut fb, Rgba::rgb(26, 26, 46), Rgba::rgb(22, 33, 62)));
    });

    let mut clear_fb = Framebuffer::new(1000, 700).unwrap();
    group.bench_function("blend_span_transparent_1000x700", |b| {
        b.iter(|| {
            clear_fb.clear(Rgba::TRANSPARENT);
            for y in 0..700 {
                clear_fb.blend_span(0, 1000, black_box(y), bar_row);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, framebuffer_clear_benchmark, framebuffer_blend_benchmark);
criterion_main!(benches);
