// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stackboard_index::ZOrder;

/// `n` entries at `0, stride, 2 * stride, ...`. A stride of 1 is one dense run.
fn gen_order(n: u32, stride: i32) -> ZOrder<u32> {
    let mut order = ZOrder::new();
    for i in 0..n {
        let z = i32::try_from(i).unwrap() * stride;
        order.insert(z, i);
    }
    order
}

fn bench_place_bottom(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_bottom");
    for &n in &[1_000_u32, 10_000, 100_000] {
        group.throughput(Throughput::Elements(u64::from(n)));
        // Worst case: the whole index is one run and every entry moves.
        let dense = gen_order(n, 1);
        group.bench_function(format!("dense_n{n}"), |b| {
            b.iter_batched(
                || dense.clone(),
                |mut order| {
                    let moved = order.place(0, u32::MAX).unwrap();
                    black_box(moved.len());
                },
                BatchSize::LargeInput,
            );
        });
        // Gaps everywhere: only the bottom entry moves.
        let sparse = gen_order(n, 2);
        group.bench_function(format!("sparse_n{n}"), |b| {
            b.iter_batched(
                || sparse.clone(),
                |mut order| {
                    let moved = order.place(0, u32::MAX).unwrap();
                    black_box(moved.len());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_stack_on_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_on_top");
    for &n in &[1_000_u32, 10_000] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let mut order = ZOrder::new();
                for i in 0..n {
                    let z = order.next_top().unwrap();
                    order.place(z, i).unwrap();
                }
                black_box(order.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_place_bottom, bench_stack_on_top);
criterion_main!(benches);
