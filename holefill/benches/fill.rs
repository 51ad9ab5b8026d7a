use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use holefill::{fill_hole, prepare_image, Connectivity, FillConfig, HoleRegion, PowerLawKernel, RawImage};

/// Square mask with a centred square hole of side `hole`.
fn square_hole_mask(size: usize, hole: usize) -> Vec<u8> {
    let start = (size - hole) / 2;
    let end = start + hole;
    (0..size * size)
        .map(|i| {
            let (x, y) = (i / size, i % size);
            if (start..end).contains(&x) && (start..end).contains(&y) {
                0
            } else {
                255
            }
        })
        .collect()
}

fn fill_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_hole");
    let size = 256;

    for hole in [8, 32, 64] {
        let mask_bytes = square_hole_mask(size, hole);
        let mask = RawImage::new(&mask_bytes, size, size, 1).unwrap();
        let config = FillConfig::default().connectivity(Connectivity::Eight);
        let region = HoleRegion::from_mask(&mask, &config).unwrap();
        let kernel = PowerLawKernel::new(config.z, config.e).unwrap();

        let image_bytes: Vec<u8> = (0..size * size).map(|i| (i % 251) as u8).collect();
        let image = RawImage::new(&image_bytes, size, size, 1).unwrap();
        let prepared = prepare_image(&image, region.holes(), config.hole_value).unwrap();

        group.throughput(Throughput::Elements(
            (region.holes().len() * region.boundaries().len()) as u64,
        ));
        group.bench_with_input(
            BenchmarkId::new("hole", format!("{}x{}", hole, hole)),
            &prepared,
            |b, prepared| {
                b.iter(|| {
                    let mut buffer = prepared.clone();
                    fill_hole(&mut buffer, region.holes(), region.boundaries(), &kernel).unwrap();
                    black_box(buffer);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, fill_benchmarks);
criterion_main!(benches);
