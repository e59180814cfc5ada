// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two dropdowns side by side over 100,000 generated options.
//!
//! The left one is multi-select and starts empty; the right one is
//! single-select and starts at the second option. A scripted sequence of
//! presses plays the part of a user.
//!
//! Run:
//! - `RUST_LOG=understory_dropdown=debug cargo run -p understory_demos --example dropdown_pair`

use std::error::Error;

use kurbo::Point;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use understory_dropdown::{Dropdown, DropdownConfig, DropdownProps, OutsideSignal, Selection};

const OPTION_COUNT: usize = 100_000;
const ROW_H: f64 = 55.0;
const HEADER_H: f64 = 56.0;

/// A dropdown plus the selection its "parent" keeps for it.
struct Controlled<S> {
    name: &'static str,
    dropdown: Dropdown<S>,
    value: Selection<String>,
}

impl<S: OutsideSignal> Controlled<S> {
    fn press(&mut self, pt: Point, options: &[String]) -> Result<(), Box<dyn Error>> {
        let mut next = None;
        let props = DropdownProps::new(options, &self.value);
        let result = self.dropdown.pointer_down(pt, &props, &mut |v| next = Some(v))?;
        if let Some(v) = next {
            self.value = v;
        }
        info!(
            event = "demo.press",
            widget = self.name,
            x = pt.x,
            y = pt.y,
            consumed = result.consumed,
            open = self.dropdown.is_open(),
        );
        Ok(())
    }

    fn print(&mut self, options: &[String]) -> Result<(), Box<dyn Error>> {
        let view = self.dropdown.render(&DropdownProps::new(options, &self.value))?;
        println!("[{}] {:?} {}", self.name, view.header.affordance, view.header.text);
        if let Some(list) = view.list {
            println!(
                "  scroll {:.0} / {:.0}, {} rows realized (+{} -{})",
                list.scroll_offset,
                list.content_height,
                list.rows.len(),
                list.changes.realized.len(),
                list.changes.released.len(),
            );
            for row in list.rows {
                let mark = if row.view.is_checked() || row.view.is_highlighted() {
                    '*'
                } else {
                    ' '
                };
                println!(
                    "  {mark} slot {:>2} y={:>6.1} {}",
                    row.slot.index(),
                    row.rect.y0,
                    row.view.label
                );
            }
        }
        Ok(())
    }
}

fn row_center(origin: Point, row: usize) -> Point {
    Point::new(origin.x + 20.0, origin.y + HEADER_H + row as f64 * ROW_H + ROW_H / 2.0)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let options: Vec<String> = (0..OPTION_COUNT).map(|i| format!("component-{i:05}")).collect();

    let left_origin = Point::new(0.0, 0.0);
    let right_origin = Point::new(400.0, 0.0);

    let mut left = Controlled {
        name: "multi",
        dropdown: Dropdown::new(DropdownConfig::multi().with_placeholder("Hive Component"))?,
        value: Selection::multi([]),
    };
    let mut right = Controlled {
        name: "single",
        dropdown: Dropdown::new(DropdownConfig::single())?,
        value: Selection::single(options[1].clone()),
    };
    right.dropdown.set_origin(right_origin);

    left.print(&options)?;
    right.print(&options)?;

    // Open the multi-select, pick two options, then scroll deep into the list.
    let header = Point::new(left_origin.x + 10.0, left_origin.y + 10.0);
    left.press(header, &options)?;
    left.press(row_center(left_origin, 2), &options)?;
    left.press(row_center(left_origin, 4), &options)?;
    left.print(&options)?;
    let _ = left.dropdown.scroll(ROW_H * 50_000.0);
    left.print(&options)?;

    // Select everything, then clear it again.
    let _ = left.dropdown.scroll_to_row(0);
    left.press(row_center(left_origin, 0), &options)?;
    left.print(&options)?;
    left.press(row_center(left_origin, 0), &options)?;

    // Pressing the other dropdown is an outside press for this one.
    let other_header = Point::new(right_origin.x + 10.0, right_origin.y + 10.0);
    left.press(other_header, &options)?;
    right.press(other_header, &options)?;
    left.print(&options)?;
    right.print(&options)?;

    // A single-select choice closes the list.
    right.press(row_center(right_origin, 3), &options)?;
    right.print(&options)?;

    // And the "All" row selects the sentinel, not an option.
    right.press(other_header, &options)?;
    right.press(row_center(right_origin, 0), &options)?;
    right.print(&options)?;

    Ok(())
}
