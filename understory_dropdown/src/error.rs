// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at construction and when props disagree with the configuration.

use understory_selection::SelectMode;

/// Invalid [`DropdownConfig`](crate::DropdownConfig) geometry.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Row height must be finite and positive.
    #[error("row height must be finite and positive, got {0}")]
    RowHeight(f64),
    /// Header height must be finite and positive.
    #[error("header height must be finite and positive, got {0}")]
    HeaderHeight(f64),
    /// Box width and height must be finite and positive.
    #[error("box size must be finite and positive, got {width}x{height}")]
    BoxSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

/// A render or event could not be handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DropdownError {
    /// The selection passed in props is of a different mode than the dropdown.
    #[error("dropdown is configured for {expected:?} selection but was given a {found:?} value")]
    ModeMismatch {
        /// Mode from the configuration.
        expected: SelectMode,
        /// Mode of the selection that was passed.
        found: SelectMode,
    },
}
