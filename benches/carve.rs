use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image::Rgb;
use torusseam::{Axis, PixelGrid, SeamEngine};

fn synthetic(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x * y) % 256) as u8])
    })
}

fn bench_carve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Carve");

    for (width, height) in [(64, 48), (256, 192)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let engine = SeamEngine::new(synthetic(*width, *height));

        for axis in [Axis::Vertical, Axis::Horizontal].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("find_seam_{:?}", axis), &parameter_string),
                &engine,
                |b, engine| b.iter(|| black_box(engine.find_seam(*axis))),
            );
        }

        group.bench_with_input(
            BenchmarkId::new("find_and_remove_vertical", &parameter_string),
            &engine,
            |b, engine| {
                b.iter(|| {
                    let mut engine = engine.clone();
                    let seam = engine.find_seam(Axis::Vertical);
                    engine.remove_seam(&seam, Axis::Vertical);
                    black_box(engine)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_carve);
criterion_main!(benches);
