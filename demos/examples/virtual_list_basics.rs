// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowing and slot recycling without a dropdown around it.
//!
//! Run:
//! - `cargo run -p understory_demos --example virtual_list_basics`

use kurbo::{Point, Size};
use understory_virtual_list::{FixedRowWindow, VirtualList};

const ROW_H: f64 = 20.0;

fn main() {
    let window = FixedRowWindow::new(1_000_000, ROW_H, Size::new(200.0, 100.0)).with_overscan(1);
    let mut list = VirtualList::new(window);
    println!(
        "content height {:.0}, at most {} rows realized",
        list.window().content_height(),
        list.window().max_window_len()
    );

    // Simulate a few scroll positions.
    for scroll in [0.0, 30.0, 200.0, 600.0, 19_999_950.0] {
        let _ = list.window_mut().set_scroll_offset(scroll);
        let changes = list.realize();
        let rows: Vec<_> = list.rows().map(|r| (r.row, r.slot.index())).collect();
        println!(
            "scroll={scroll:.1} visible={:?} (row, slot)={rows:?} +{} -{}",
            list.window().visible_range(),
            changes.realized.len(),
            changes.released.len()
        );
    }

    let hit = list.window().row_at(Point::new(10.0, 45.0));
    println!("row under y=45: {hit:?}");
    println!("slots ever allocated: {}", list.slots().allocated());
}
