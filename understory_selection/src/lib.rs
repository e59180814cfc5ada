// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: controlled selection state for list-like widgets.
//!
//! ## Overview
//!
//! This crate holds the selection logic of a dropdown or list box, with no
//! rendering and no event handling.
//! The selection itself ([`Selection`]) is owned by the caller; the widget only
//! ever borrows it and hands back a replacement.
//!
//! - [`Selection::Single`] holds one value, nothing, or the distinct "All" sentinel.
//! - [`Selection::Multi`] holds values in the order they were picked.
//! - [`SelectionEngine`] borrows the option set and an [`OptionMapper`] and
//!   provides the pure transitions: toggle one, toggle all, and display text.
//!
//! ## Keys and labels
//!
//! All comparisons go through [`OptionMapper::key_of`] and all text through
//! [`OptionMapper::label_of`].
//! String options use [`Identity`]; richer records plug in their own mapper,
//! for example [`FnMapper`].
//!
//! ## Example
//!
//! ```rust
//! use understory_selection::{Identity, Selection, SelectionEngine, ALL_SELECTED_TEXT};
//!
//! let options = ["x", "y", "z"];
//! let engine = SelectionEngine::new(&options, &Identity);
//!
//! let picked = engine.toggle_one(&Selection::multi([]), &"y");
//! assert_eq!(picked, Selection::multi(["y"]));
//! assert_eq!(engine.display_text(&picked, "Pick one"), "y");
//!
//! let everything = engine.toggle_all(&picked);
//! assert_eq!(engine.display_text(&everything, "Pick one"), ALL_SELECTED_TEXT);
//! assert!(engine.toggle_all(&everything).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod engine;
pub mod mapper;
pub mod types;

pub use engine::{ALL_LABEL, ALL_SELECTED_TEXT, LABEL_SEPARATOR, SelectionEngine, Toggle};
pub use mapper::{FnMapper, Identity, OptionMapper};
pub use types::{SelectMode, Selection, SingleSelection};
