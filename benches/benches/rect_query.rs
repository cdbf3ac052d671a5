// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bracken_geom::Rect;
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

/// A grid of `len` unit-ish tiles, roughly square, with small gaps.
fn tile_grid(len: usize) -> Vec<Rect> {
    let side = (len as f64).sqrt().ceil() as usize;
    (0..len)
        .map(|i| {
            let col = (i % side) as f64;
            let row = (i / side) as f64;
            Rect::new(col * 12.0, row * 12.0, 10.0, 10.0)
        })
        .collect()
}

fn bench_find_overlaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect/find_overlaps");

    // Hypothesis: the all-hits query is a linear scan plus one Vec; the
    // first-hit query should win by the early return on dense grids.
    for len in [64usize, 256, 1_024, 4_096] {
        let tiles = tile_grid(len);
        // Covers roughly a quarter of the grid.
        let side = (len as f64).sqrt().ceil() * 12.0;
        let probe = Rect::new(0.0, 0.0, side / 2.0, side / 2.0);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("all_hits", len), &tiles, |b, tiles| {
            b.iter(|| black_box(probe.find_overlaps(tiles.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("first_hit", len), &tiles, |b, tiles| {
            b.iter(|| black_box(probe.find_overlap(tiles.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("union_all", len), &tiles, |b, tiles| {
            b.iter(|| black_box(probe.union_all(tiles.iter().copied())));
        });
    }

    group.finish();
}

fn bench_clamp_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect/place");

    let screen = Rect::new(0.0, 0.0, 640.0, 480.0);
    let sprites = tile_grid(1_024);
    group.throughput(Throughput::Elements(sprites.len() as u64));

    group.bench_function("clamp_all", |b| {
        b.iter_batched(
            || sprites.clone(),
            |mut sprites| {
                for sprite in &mut sprites {
                    sprite.clamp_mut(screen);
                }
                black_box(sprites);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_find_overlaps, bench_clamp_align);
criterion_main!(benches);
