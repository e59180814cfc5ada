// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dropdown --heading-base-level=0

//! Understory Dropdown: a controlled single- or multi-select dropdown core.
//!
//! ## Overview
//!
//! A [`Dropdown`] is a header box that opens a virtualized list of options.
//! It holds view state only. The option set and the selection are passed as
//! [`DropdownProps`] on every render and event, and a replacement selection
//! comes back through a change callback. The caller decides what to keep.
//!
//! - The list has one synthetic leading row: "Select All"/"Deselect All" in
//!   multi-select mode, "All" in single-select mode. See [`resolve_row`].
//! - Only the rows in the scrolled window (plus overscan) are resolved, so a
//!   dropdown over 100,000 options costs the same per frame as one over ten.
//! - Multi-select rows consume their activation and the list stays open.
//!   Single-select activations propagate, and the dropdown closes.
//! - Any press outside the header and list closes the dropdown, through an
//!   [`OutsideSignal`].
//!
//! Drawing is left to the host: [`Dropdown::render`] returns a
//! [`DropdownView`] with rectangles, labels, and row flags.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_dropdown::{Dropdown, DropdownConfig, DropdownProps, Selection};
//!
//! let options = ["x", "y", "z"];
//! let mut value = Selection::multi([]);
//! let mut dropdown = Dropdown::new(DropdownConfig::multi().with_placeholder("Pick some"))?;
//!
//! // Press the header to open.
//! let props = DropdownProps::new(&options, &value);
//! dropdown.pointer_down(Point::new(10.0, 10.0), &props, &mut |_| {})?;
//! assert!(dropdown.is_open());
//!
//! // Press the second option ("y"): header is 56 px, rows are 55 px, row 0 is "Select All".
//! let mut next = None;
//! let row_2 = Point::new(10.0, 56.0 + 2.0 * 55.0 + 5.0);
//! dropdown.pointer_down(row_2, &props, &mut |v| next = Some(v))?;
//! if let Some(v) = next {
//!     value = v;
//! }
//! assert_eq!(value, Selection::multi(["y"]));
//!
//! let view = dropdown.render(&DropdownProps::new(&options, &value))?;
//! assert_eq!(view.header.text, "y");
//! assert_eq!(view.list.map(|l| l.rows.len()), Some(4));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod outside;
pub mod propagation;
pub mod props;
pub mod row;
pub mod shell;

pub use config::{DEFAULT_PLACEHOLDER, DropdownConfig};
pub use error::{ConfigError, DropdownError};
pub use outside::{OutsideClick, OutsideSignal};
pub use propagation::{Outcome, Part, Phase};
pub use props::DropdownProps;
pub use row::{DESELECT_ALL_LABEL, RowFlags, RowKind, RowView, SELECT_ALL_LABEL, resolve_row};
pub use shell::{Affordance, Dropdown, DropdownView, EventResult, HeaderView, ListView, RenderedRow};

pub use understory_selection::{
    FnMapper, Identity, OptionMapper, SelectMode, Selection, SingleSelection,
};
