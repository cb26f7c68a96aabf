// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concurrent writers and readers sharing one store.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use stackboard_store::{NewWidget, Store, Viewport, WidgetUpdate};

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

fn new_widget(z_index: Option<i32>) -> NewWidget {
    NewWidget {
        x: 0,
        y: 0,
        z_index,
        width: 2,
        height: 2,
    }
}

/// Checks one consistent read. Lengths are compared separately because `len` takes its own lock.
fn assert_unique_and_ordered(store: &Store) -> usize {
    let widgets = store.find_with_limit(usize::MAX).unwrap();
    for pair in widgets.windows(2) {
        assert!(
            pair[0].z_index < pair[1].z_index,
            "z-order not strictly increasing: {pair:?}"
        );
    }
    let ids: HashSet<_> = widgets.iter().map(|w| w.id).collect();
    assert_eq!(ids.len(), widgets.len(), "duplicate ids");
    widgets.len()
}

#[test]
fn concurrent_creates_at_same_z_stay_unique() {
    let store = Arc::new(Store::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    // Half of the writes collide at the bottom, the rest stack on top.
                    let z = if i % 2 == 0 { Some(0) } else { None };
                    store.create(new_widget(z)).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.len(), THREADS * PER_THREAD);
    assert_eq!(assert_unique_and_ordered(&store), THREADS * PER_THREAD);
}

#[test]
fn readers_never_see_partial_writes() {
    let store = Arc::new(Store::new());
    for _ in 0..50 {
        store.create(new_widget(None)).unwrap();
    }

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let all = store.find_with_limit(usize::MAX).unwrap();
                    let victim = &all[(t * 7 + i) % all.len()];
                    let mut update = WidgetUpdate::from_widget(victim);
                    update.z_index = Some(i32::try_from(i % 10).unwrap());
                    // Another writer may have deleted it in between; that is fine.
                    let _ = store.update(update);
                    if i % 5 == 0 {
                        let created = store.create(new_widget(Some(3))).unwrap();
                        store.delete(created.id).unwrap();
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    let seen = assert_unique_and_ordered(&store);
                    // Writers only ever add one widget before deleting it again.
                    assert!((50..=54).contains(&seen), "saw {seen} widgets");
                    let visible = store
                        .find_with_rectangle(Viewport::new(-1, -1, 1, 1), 10)
                        .unwrap();
                    assert!(visible.len() <= 10);
                }
            })
        })
        .collect();

    for h in writers.into_iter().chain(readers) {
        h.join().unwrap();
    }
    assert_eq!(store.len(), 50);
    assert_eq!(assert_unique_and_ordered(&store), 50);
}
