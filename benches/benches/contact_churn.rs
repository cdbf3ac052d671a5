// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bracken_contact::ContactState;
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

/// A state with `pairs` contacts already in the window, mid-stream.
fn warmed(pairs: u32) -> ContactState<u32, ()> {
    let mut state = ContactState::new();
    for i in 0..pairs {
        state.register(i, i + 10_000, ());
    }
    state.flush();
    state
}

fn bench_steady_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact/steady_frame");

    // Hypothesis: a steady frame is dominated by the window-membership scan
    // per register, so cost grows linearly with live pairs.
    for pairs in [64u32, 512, 4_096] {
        group.throughput(Throughput::Elements(u64::from(pairs)));

        group.bench_with_input(BenchmarkId::new("re_register_all", pairs), &pairs, |b, &n| {
            b.iter_batched(
                || warmed(n),
                |mut state| {
                    for i in 0..n {
                        state.register(i, i + 10_000, ());
                    }
                    black_box(state.flush());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact/churn");

    // Worst case for retirement: every pair from three frames ago expires
    // while a disjoint batch starts, so each flush walks a full frame.
    for pairs in [64u32, 512, 4_096] {
        group.throughput(Throughput::Elements(u64::from(pairs)));

        group.bench_with_input(BenchmarkId::new("full_turnover", pairs), &pairs, |b, &n| {
            b.iter_batched(
                || {
                    let mut state = warmed(n);
                    // Age the first batch to the edge of the window, so the
                    // measured flush is the one that retires it.
                    state.flush();
                    state
                },
                |mut state| {
                    for i in 0..n {
                        state.register(i + 20_000, i + 30_000, ());
                    }
                    black_box(state.flush());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_steady_frame, bench_churn);
criterion_main!(benches);
