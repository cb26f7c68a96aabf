// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store basics.
//!
//! Create a few widgets, drop one underneath the others, move one, delete one.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p stackboard_demos --example store_basics`

use stackboard_store::{NewWidget, Store, Widget, WidgetUpdate};
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

fn print_stack(store: &Store) {
    let widgets: Vec<Widget> = store.find_with_limit(100).unwrap();
    for w in widgets {
        println!(
            "  z={:>3} id={} center=({}, {}) size={}x{}",
            w.z_index, w.id, w.x, w.y, w.width, w.height
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = Store::new();
    let span = info_span!("stack_two").entered();
    let w1 = store
        .create(NewWidget {
            x: 0,
            y: 0,
            z_index: None,
            width: 10,
            height: 10,
        })
        .unwrap();
    let w2 = store
        .create(NewWidget {
            x: 20,
            y: 0,
            z_index: None,
            width: 10,
            height: 10,
        })
        .unwrap();
    println!("two widgets stacked on top of each other:");
    print_stack(&store);
    drop(span);

    // Dropping a widget at z=0 pushes the whole run up.
    let span = info_span!("insert_at_bottom").entered();
    let w3 = store
        .create(NewWidget {
            x: 40,
            y: 0,
            z_index: Some(0),
            width: 10,
            height: 10,
        })
        .unwrap();
    println!("after inserting {} at z=0:", w3.id);
    print_stack(&store);
    drop(span);

    // Move w2 to the bottom.
    let span = info_span!("move_to_bottom", id = %w2.id).entered();
    let mut update = WidgetUpdate::from_widget(&w2);
    update.z_index = Some(0);
    let moved = store.update(update).unwrap();
    info!(z_index = moved.z_index, "moved");
    println!("after moving {} to z=0:", w2.id);
    print_stack(&store);
    drop(span);

    let _span = info_span!("delete", id = %w1.id).entered();
    store.delete(w1.id).unwrap();
    println!("after deleting {} (the gap stays):", w1.id);
    print_stack(&store);

    let err = store.find_by_id(w1.id).unwrap_err();
    info!(kind = ?err.kind(), "lookup after delete failed");
    println!("looking {} up again: {err}", w1.id);
}
