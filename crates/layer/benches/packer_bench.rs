//! Benchmarks for layer pallet packing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palletpack_core::solver::{Config, Solver};
use palletpack_layer::{create_layers, CargoBox, LayerPacker, Pallet};

fn uniform_boxes(n: usize) -> Vec<CargoBox> {
    (0..n)
        .map(|i| CargoBox::new(format!("B{}", i), 10, 10, 10))
        .collect()
}

fn mixed_boxes(n: i64) -> Vec<CargoBox> {
    (0..n)
        .map(|i| CargoBox::new(format!("M{}", i), 8 + i % 13, 5 + i % 7, 6 + i % 11))
        .collect()
}

fn packer_benchmark(c: &mut Criterion) {
    let geometries = uniform_boxes(20);
    let boundary = Pallet::new(100, 100, 100);
    let packer = LayerPacker::default_config();

    c.bench_function("pack_20_uniform_boxes", |b| {
        b.iter(|| {
            let result = packer.solve(black_box(&geometries), black_box(&boundary));
            black_box(result)
        })
    });

    let mixed = mixed_boxes(80);
    let pallet = Pallet::new(60, 45, 50);

    c.bench_function("pack_80_mixed_boxes", |b| {
        b.iter(|| {
            let result = packer.solve(black_box(&mixed), black_box(&pallet));
            black_box(result)
        })
    });

    let parallel = LayerPacker::new(Config::new().with_parallel(true));
    c.bench_function("pack_80_mixed_boxes_parallel", |b| {
        b.iter(|| {
            let result = parallel.solve(black_box(&mixed), black_box(&pallet));
            black_box(result)
        })
    });

    c.bench_function("create_layers_80_mixed", |b| {
        b.iter(|| black_box(create_layers(black_box(&mixed), pallet.dimensions())))
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
