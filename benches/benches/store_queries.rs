// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use stackboard_store::{NewWidget, Store, Viewport};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_in(&mut self, span: u32) -> i32 {
        i32::try_from(self.next_u64() % u64::from(span)).unwrap()
    }
}

/// `count` widgets scattered over a `world` × `world` square, stacked in creation order.
fn gen_store(count: usize, world: u32) -> Store {
    let store = Store::new();
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        store
            .create(NewWidget {
                x: rng.next_in(world),
                y: rng.next_in(world),
                z_index: None,
                width: 1 + rng.next_in(40).unsigned_abs(),
                height: 1 + rng.next_in(40).unsigned_abs(),
            })
            .unwrap();
    }
    store
}

fn bench_find_with_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_with_limit");
    let store = gen_store(10_000, 2_000);
    for &limit in &[10_usize, 100, 500] {
        group.throughput(Throughput::Elements(limit as u64));
        group.bench_function(format!("limit{limit}"), |b| {
            b.iter(|| black_box(store.find_with_limit(limit).unwrap().len()));
        });
    }
    group.finish();
}

fn bench_find_with_rectangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_with_rectangle");
    for &count in &[1_000_usize, 10_000] {
        let store = gen_store(count, 2_000);
        group.throughput(Throughput::Elements(count as u64));
        // A small viewport rarely fills the limit, so the scan covers the whole index.
        group.bench_function(format!("small_viewport_n{count}"), |b| {
            let viewport = Viewport::new(100, 100, 300, 300);
            b.iter(|| black_box(store.find_with_rectangle(viewport, 500).unwrap().len()));
        });
        group.bench_function(format!("whole_world_n{count}"), |b| {
            let viewport = Viewport::new(-100, -100, 2_100, 2_100);
            b.iter(|| black_box(store.find_with_rectangle(viewport, 10).unwrap().len()));
        });
    }
    group.finish();
}

fn bench_create_colliding(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_colliding");
    group.bench_function("bottom_of_1000", |b| {
        b.iter_batched(
            || gen_store(1_000, 2_000),
            |store| {
                let w = store
                    .create(NewWidget {
                        x: 0,
                        y: 0,
                        z_index: Some(0),
                        width: 1,
                        height: 1,
                    })
                    .unwrap();
                black_box(w.id);
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_find_with_limit,
    bench_find_with_rectangle,
    bench_create_colliding,
);
criterion_main!(benches);
