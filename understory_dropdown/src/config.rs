// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown configuration and its defaults.

use alloc::string::String;

use kurbo::Size;
use understory_selection::SelectMode;
use understory_virtual_list::DEFAULT_OVERSCAN;

use crate::error::ConfigError;

/// Placeholder shown while nothing is selected, unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: &str = "Please select a value";

/// Static configuration of a [`Dropdown`](crate::Dropdown).
///
/// Everything here is fixed for the widget's lifetime. The option set, the
/// current selection and the mapper are per-render props instead
/// ([`DropdownProps`](crate::DropdownProps)).
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownConfig {
    /// Multi-select with checkboxes when true, single-select otherwise.
    pub is_multi: bool,
    /// Header text while the selection is empty.
    pub placeholder: String,
    /// Size of the list viewport below the header.
    pub box_size: Size,
    /// Height of every list row.
    pub row_height: f64,
    /// Height of the header box.
    pub header_height: f64,
    /// Rows realized beyond each edge of the list viewport.
    pub overscan: usize,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            is_multi: false,
            placeholder: String::from(DEFAULT_PLACEHOLDER),
            box_size: Size::new(320.0, 230.0),
            row_height: 55.0,
            header_height: 56.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl DropdownConfig {
    /// Default single-select configuration.
    pub fn single() -> Self {
        Self::default()
    }

    /// Default multi-select configuration.
    pub fn multi() -> Self {
        Self {
            is_multi: true,
            ..Self::default()
        }
    }

    /// Replace the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the list viewport size.
    #[must_use]
    pub fn with_box_size(mut self, box_size: Size) -> Self {
        self.box_size = box_size;
        self
    }

    /// Replace the row height.
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Selection mode implied by [`Self::is_multi`].
    pub fn mode(&self) -> SelectMode {
        if self.is_multi {
            SelectMode::Multi
        } else {
            SelectMode::Single
        }
    }

    /// Check that all geometry is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(v: f64) -> bool {
            v.is_finite() && v > 0.0
        }
        if !positive(self.row_height) {
            return Err(ConfigError::RowHeight(self.row_height));
        }
        if !positive(self.header_height) {
            return Err(ConfigError::HeaderHeight(self.header_height));
        }
        if !positive(self.box_size.width) || !positive(self.box_size.height) {
            return Err(ConfigError::BoxSize {
                width: self.box_size.width,
                height: self.box_size.height,
            });
        }
        Ok(())
    }
}
