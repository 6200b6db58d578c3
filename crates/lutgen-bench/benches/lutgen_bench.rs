//! Benchmarks for lutgen operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use lutgen_color::{LUT_SIZE, LutRequest, analyze, bake, generate};
use lutgen_core::RgbaImage;
use lutgen_lut::cube::{self, CubeHeader};
use lutgen_lut::{LutFormat, xmp};

fn test_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        [(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255]
    })
}

/// Benchmark statistics over different image sizes.
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for size in [256u32, 1024, 2048].iter() {
        let image = test_image(*size, *size);
        group.throughput(Throughput::Elements(image.pixel_count() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, img| {
            b.iter(|| analyze(black_box(img)))
        });
    }

    group.finish();
}

/// Benchmark grid sampling.
fn bench_bake(c: &mut Criterion) {
    let mut group = c.benchmark_group("bake");
    let stats = analyze(&test_image(256, 256));

    for size in [17usize, 33, LUT_SIZE, 65].iter() {
        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &s| {
            b.iter(|| bake(black_box(&stats), s))
        });
    }

    group.finish();
}

/// Benchmark the text encoders on a 32^3 grid.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let lut = bake(&analyze(&test_image(256, 256)), LUT_SIZE);
    let header = CubeHeader::titled("Bench");
    group.throughput(Throughput::Elements(lut.entry_count() as u64));

    group.bench_function("cube", |b| {
        b.iter(|| cube::to_string_3d(black_box(&lut), &header))
    });

    group.bench_function("xmp", |b| {
        b.iter(|| xmp::to_string_look_table(black_box(&lut)))
    });

    group.finish();
}

/// Benchmark the full request pipeline.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let image = test_image(1024, 1024);

    for format in LutFormat::ALL {
        let request = LutRequest::new(image.clone(), format);
        group.bench_function(format.extension(), |b| {
            b.iter(|| generate(black_box(&request)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_bake, bench_encode, bench_generate);
criterion_main!(benches);
