//! Benchmarks for the brix pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::RgbImage;

use brix::{colour_table, compose, quantize_image, Catalog, Texture};

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

// -- Table benchmarks --

fn bench_tables(c: &mut Criterion) {
    let catalog = Catalog::new().unwrap();
    let mut group = c.benchmark_group("tables");

    group.bench_function("colour_table_merged", |b| {
        b.iter(|| colour_table(black_box(catalog.merged())).unwrap())
    });

    group.finish();
}

// -- Quantization benchmarks --

fn bench_quantize(c: &mut Criterion) {
    let catalog = Catalog::new().unwrap();
    let table = colour_table(catalog.merged()).unwrap();

    let small = gradient(64, 48);
    let large = gradient(1024, 768);

    let mut group = c.benchmark_group("quantize");

    group.bench_function("quantize_64x48_to_16", |b| {
        b.iter(|| quantize_image(black_box(&small), 16, &table).unwrap())
    });

    group.bench_function("quantize_1024x768_to_100", |b| {
        b.iter(|| quantize_image(black_box(&large), 100, &table).unwrap())
    });

    group.finish();
}

// -- Composition benchmarks --

fn bench_compose(c: &mut Criterion) {
    let catalog = Catalog::new().unwrap();
    let texture = Texture::builtin().unwrap();
    let table = colour_table(catalog.merged()).unwrap();
    let grid = quantize_image(&gradient(256, 192), 48, &table).unwrap();

    let mut group = c.benchmark_group("compose");
    group.sample_size(20);

    group.bench_function("compose_48x36", |b| {
        b.iter(|| compose(black_box(&grid), &texture, &catalog).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_tables, bench_quantize, bench_compose);
criterion_main!(benches);
