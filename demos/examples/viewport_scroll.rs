// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window example using viewport queries.
//!
//! Run:
//! - `cargo run -p stackboard_demos --example viewport_scroll`

use stackboard_store::{NewWidget, Store, Viewport};

const ROW_H: u32 = 20;
const WIDTH: u32 = 200;

fn main() {
    let store = Store::new();

    let rows = 1000_i32;
    for i in 0..rows {
        store
            .create(NewWidget {
                x: 100,
                y: i * 20 + 10,
                z_index: None,
                width: WIDTH,
                height: ROW_H,
            })
            .unwrap();
    }

    // Simulate a few scroll positions by moving the viewport.
    for scroll in [0, 30, 200, 600] {
        let viewport = Viewport::new(0, scroll, 200, scroll + 100);
        let visible = store.find_with_rectangle(viewport, 50).unwrap();
        let z: Vec<_> = visible.iter().map(|w| w.z_index).collect();
        println!("scroll={scroll} -> fully visible rows: {z:?}");
    }
}
