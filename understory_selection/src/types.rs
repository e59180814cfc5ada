// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection values: modes, the single-select sentinel, and the controlled selection enum.

use alloc::vec::Vec;

/// Whether a selection holds one value or an ordered set of values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SelectMode {
    /// Exactly one value, the empty sentinel, or the "All" sentinel.
    Single,
    /// An insertion-ordered set of values.
    Multi,
}

/// Single-select state.
///
/// `All` is its own variant so that an option whose label happens to be
/// `"All"` can never be confused with the synthetic "All" row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SingleSelection<T> {
    /// Nothing selected yet.
    Empty,
    /// The synthetic "All" row was chosen.
    All,
    /// A concrete option.
    Value(T),
}

// Written by hand: `#[derive(Default)]` would require `T: Default`.
impl<T> Default for SingleSelection<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> SingleSelection<T> {
    /// True for [`SingleSelection::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The selected option, if a concrete one is selected.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Empty | Self::All => None,
        }
    }
}

/// Controlled selection state.
///
/// The caller owns this value. Transitions in
/// [`SelectionEngine`](crate::SelectionEngine) borrow it and return a fresh
/// replacement; they never mutate it in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// Single-select state.
    Single(SingleSelection<T>),
    /// Multi-select state, in insertion order.
    Multi(Vec<T>),
}

// Written by hand: `#[derive(Default)]` would require `T: Default`.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Single(SingleSelection::Empty)
    }
}

impl<T> Selection<T> {
    /// An empty selection of the given mode.
    pub const fn empty(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => Self::Single(SingleSelection::Empty),
            SelectMode::Multi => Self::Multi(Vec::new()),
        }
    }

    /// A single selection holding `value`.
    pub fn single(value: T) -> Self {
        Self::Single(SingleSelection::Value(value))
    }

    /// A multi selection holding `values` in the given order.
    ///
    /// Callers are responsible for not passing duplicate keys.
    pub fn multi(values: impl IntoIterator<Item = T>) -> Self {
        Self::Multi(values.into_iter().collect())
    }

    /// The mode implied by the variant.
    pub fn mode(&self) -> SelectMode {
        match self {
            Self::Single(_) => SelectMode::Single,
            Self::Multi(_) => SelectMode::Multi,
        }
    }

    /// True when nothing is selected (`Single(Empty)` or an empty `Multi`).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::Multi(v) => v.is_empty(),
        }
    }

    /// The selected values of a multi selection.
    pub fn as_multi(&self) -> Option<&[T]> {
        match self {
            Self::Multi(v) => Some(v),
            Self::Single(_) => None,
        }
    }

    /// The state of a single selection.
    pub fn as_single(&self) -> Option<&SingleSelection<T>> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multi(_) => None,
        }
    }
}
