// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render inputs: the option set, the caller's selection, and the mapper.

use understory_selection::{Identity, OptionMapper, Selection, SelectionEngine};

/// Borrowed inputs for one render or one event.
///
/// The dropdown never keeps these between calls; callers pass the current
/// values every time, which is what makes the widget controlled.
pub struct DropdownProps<'a, T, M = Identity> {
    /// Backing option set, in display order.
    pub options: &'a [T],
    /// Caller-owned selection.
    pub value: &'a Selection<T>,
    /// Key and label extraction.
    pub mapper: &'a M,
}

impl<'a, T> DropdownProps<'a, T> {
    /// Props for string options, using [`Identity`] keys and labels.
    pub fn new(options: &'a [T], value: &'a Selection<T>) -> Self {
        Self {
            options,
            value,
            mapper: &Identity,
        }
    }
}

impl<'a, T, M> DropdownProps<'a, T, M> {
    /// Replace the mapper.
    pub fn with_mapper<N>(self, mapper: &'a N) -> DropdownProps<'a, T, N> {
        DropdownProps {
            options: self.options,
            value: self.value,
            mapper,
        }
    }

    /// Logical row count: every option plus the synthetic "All" row.
    pub fn row_count(&self) -> usize {
        self.options.len() + 1
    }
}

impl<'a, T, M: OptionMapper<T>> DropdownProps<'a, T, M> {
    /// Selection engine over these props' options and mapper.
    pub fn engine(&self) -> SelectionEngine<'a, T, M> {
        SelectionEngine::new(self.options, self.mapper)
    }
}

impl<T, M> Clone for DropdownProps<'_, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M> Copy for DropdownProps<'_, T, M> {}

impl<T, M> core::fmt::Debug for DropdownProps<'_, T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DropdownProps")
            .field("options", &self.options.len())
            .field("mode", &self.value.mode())
            .finish_non_exhaustive()
    }
}
