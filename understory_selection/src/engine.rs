// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure selection transitions over an option set.
//!
//! ## Overview
//!
//! [`SelectionEngine`] borrows the option set and a mapper for one render or
//! event and answers questions about a caller-owned [`Selection`]:
//!
//! - [`SelectionEngine::is_all_selected`] compares cardinalities; it is never cached.
//! - [`SelectionEngine::toggle_one`] and [`SelectionEngine::toggle_all`] return a
//!   replacement selection and leave the input untouched.
//! - [`SelectionEngine::display_text`] derives the header text.
//!
//! Equality between options always goes through [`OptionMapper::key_of`], so
//! freshly constructed options with the same key still match.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::mapper::OptionMapper;
use crate::types::{Selection, SingleSelection};

/// Header text shown when every option of a multi selection is selected.
pub const ALL_SELECTED_TEXT: &str = "All values are selected";

/// Label of the single-select "All" sentinel.
pub const ALL_LABEL: &str = "All";

/// Separator placed between labels of a partial multi selection.
pub const LABEL_SEPARATOR: &str = ",";

/// A requested change, as produced by a row activation.
#[derive(Debug, PartialEq, Eq)]
pub enum Toggle<'a, T> {
    /// Select everything, clear everything, or choose the "All" sentinel.
    All,
    /// Toggle (multi) or choose (single) one option.
    One(&'a T),
}

impl<T> Clone for Toggle<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Toggle<'_, T> {}

/// Selection transitions over a borrowed option set.
pub struct SelectionEngine<'a, T, M> {
    options: &'a [T],
    mapper: &'a M,
}

impl<T, M> Clone for SelectionEngine<'_, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M> Copy for SelectionEngine<'_, T, M> {}

impl<T, M> core::fmt::Debug for SelectionEngine<'_, T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("options", &self.options.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T, M: OptionMapper<T>> SelectionEngine<'a, T, M> {
    /// Create an engine over `options`, comparing and labelling with `mapper`.
    pub fn new(options: &'a [T], mapper: &'a M) -> Self {
        Self { options, mapper }
    }

    /// The option set this engine was built over.
    pub fn options(&self) -> &'a [T] {
        self.options
    }

    /// The mapper this engine compares and labels with.
    pub fn mapper(&self) -> &'a M {
        self.mapper
    }

    /// True iff a multi selection has as many entries as there are options.
    ///
    /// Always `false` for single selections.
    pub fn is_all_selected(&self, current: &Selection<T>) -> bool {
        match current {
            Selection::Multi(values) => values.len() == self.options.len(),
            Selection::Single(_) => false,
        }
    }

    /// True if `option` is part of `current`, compared by key.
    pub fn contains(&self, current: &Selection<T>, option: &T) -> bool {
        match current {
            Selection::Multi(values) => values.iter().any(|v| self.mapper.same_key(v, option)),
            Selection::Single(SingleSelection::Value(v)) => self.mapper.same_key(v, option),
            Selection::Single(SingleSelection::Empty | SingleSelection::All) => false,
        }
    }

    /// Toggle one option.
    ///
    /// Multi: removes the first entry with the same key, or appends `option`.
    /// Single: replaces whatever was selected with `option`.
    pub fn toggle_one(&self, current: &Selection<T>, option: &T) -> Selection<T>
    where
        T: Clone,
    {
        match current {
            Selection::Multi(values) => {
                let mut next = Vec::with_capacity(values.len() + 1);
                match values.iter().position(|v| self.mapper.same_key(v, option)) {
                    Some(i) => {
                        next.extend_from_slice(&values[..i]);
                        next.extend_from_slice(&values[i + 1..]);
                    }
                    None => {
                        next.extend_from_slice(values);
                        next.push(option.clone());
                    }
                }
                Selection::Multi(next)
            }
            Selection::Single(_) => Selection::single(option.clone()),
        }
    }

    /// Toggle everything.
    ///
    /// Multi: clears when all are selected, otherwise selects every option in
    /// option-set order. Single: chooses the "All" sentinel.
    pub fn toggle_all(&self, current: &Selection<T>) -> Selection<T>
    where
        T: Clone,
    {
        match current {
            Selection::Multi(_) if self.is_all_selected(current) => Selection::Multi(Vec::new()),
            Selection::Multi(_) => Selection::Multi(self.options.to_vec()),
            Selection::Single(_) => Selection::Single(SingleSelection::All),
        }
    }

    /// Apply a [`Toggle`] to `current`.
    pub fn apply(&self, current: &Selection<T>, toggle: Toggle<'_, T>) -> Selection<T>
    where
        T: Clone,
    {
        match toggle {
            Toggle::All => self.toggle_all(current),
            Toggle::One(option) => self.toggle_one(current, option),
        }
    }

    /// Text for the header box.
    ///
    /// Empty selections show `placeholder`. A complete multi selection shows
    /// [`ALL_SELECTED_TEXT`]; a partial one joins labels with
    /// [`LABEL_SEPARATOR`] in selection order.
    pub fn display_text<'s>(
        &self,
        current: &'s Selection<T>,
        placeholder: &'s str,
    ) -> Cow<'s, str> {
        if current.is_empty() {
            return Cow::Borrowed(placeholder);
        }
        match current {
            Selection::Multi(_) if self.is_all_selected(current) => {
                Cow::Borrowed(ALL_SELECTED_TEXT)
            }
            Selection::Multi(values) => {
                let mut out = String::new();
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        out.push_str(LABEL_SEPARATOR);
                    }
                    out.push_str(&self.mapper.label_of(v));
                }
                Cow::Owned(out)
            }
            Selection::Single(SingleSelection::Value(v)) => self.mapper.label_of(v),
            Selection::Single(SingleSelection::All) => Cow::Borrowed(ALL_LABEL),
            Selection::Single(SingleSelection::Empty) => Cow::Borrowed(placeholder),
        }
    }
}
