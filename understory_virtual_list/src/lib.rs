// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: windowing for lists with a fixed row height.
//!
//! ## Overview
//!
//! Long lists (hundreds of thousands of rows) only need the rows that are on
//! screen, plus a small margin.
//! This crate computes that window by index arithmetic and keeps a pool of
//! recyclable row slots, so the per-frame cost depends on the viewport height,
//! not on the number of rows.
//!
//! - [`FixedRowWindow`]: row count, row height, viewport, scroll offset, overscan.
//!   Answers [`FixedRowWindow::visible_range`], [`FixedRowWindow::window_range`],
//!   [`FixedRowWindow::row_rect`] and [`FixedRowWindow::row_at`].
//! - [`SlotPool`]: binds the window range to [`SlotId`]s, recycling the slots of
//!   rows that scrolled away and reporting [`WindowChanges`].
//! - [`VirtualList`]: the two together.
//!
//! Rows are logical indices. The crate never stores or copies row data, so
//! callers are free to synthesize rows (for example a leading "select all" row)
//! by offsetting indices into their own storage.
//!
//! ## Not a layout engine
//!
//! All rows share one height and the viewport size is supplied by the caller.
//! Variable-height rows and horizontal scrolling are out of scope.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_virtual_list::{FixedRowWindow, VirtualList};
//!
//! let mut list = VirtualList::new(FixedRowWindow::new(100_001, 55.0, Size::new(320.0, 230.0)));
//! let changes = list.realize();
//! assert_eq!(changes.realized.len(), 7); // 5 visible rows + 2 rows of overscan below
//!
//! let _ = list.window_mut().scroll_by(55.0 * 50_000.0);
//! let _ = list.realize();
//! assert!(list.rows().all(|r| (49_998..50_007).contains(&r.row)));
//! assert!(list.slots().allocated() <= list.window().max_window_len());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod list;
mod slots;
mod util;
mod window;

pub use list::{RealizedRow, VirtualList};
pub use slots::{SlotId, SlotPool, WindowChanges};
pub use window::{DEFAULT_OVERSCAN, FixedRowWindow};
