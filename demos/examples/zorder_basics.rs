// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Using the bare z-order index without the store.
//!
//! Run:
//! - `cargo run -p stackboard_demos --example zorder_basics`

use stackboard_index::ZOrder;

fn main() {
    let mut order: ZOrder<&str> = ZOrder::new();
    for name in ["sky", "hills", "house"] {
        let z = order.next_top().unwrap();
        order.place(z, name).unwrap();
    }
    order.place(10, "sun").unwrap();
    println!("start: {:?}", order.iter().collect::<Vec<_>>());

    // Slide "cloud" in at z=1: hills and house move up, sun stays behind the gap.
    let moved = order.place(1, "cloud").unwrap();
    for shift in &moved {
        println!("moved {} from {} to {}", shift.payload, shift.from, shift.to);
    }
    println!("after: {:?}", order.iter().collect::<Vec<_>>());
}
