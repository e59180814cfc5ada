// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row resolution: logical row index → synthetic "All" row or a real option.
//!
//! Row 0 is never stored anywhere. [`resolve_row`] synthesizes it on demand
//! and maps every other row to `options[row - 1]`, so the list can be
//! windowed over `options.len() + 1` rows without copying the option set.

use alloc::borrow::Cow;

use understory_selection::{ALL_LABEL, OptionMapper, SelectMode, Selection, Toggle};

use crate::propagation::Outcome;
use crate::props::DropdownProps;

/// Label of the multi-select "All" row while not everything is selected.
pub const SELECT_ALL_LABEL: &str = "Select All";

/// Label of the multi-select "All" row while everything is selected.
pub const DESELECT_ALL_LABEL: &str = "Deselect All";

bitflags::bitflags! {
    /// Presentation flags of a resolved row.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// Row shows a checkbox (multi-select).
        const CHECKBOX = 0b0000_0001;
        /// Row is part of the selection: checked with a checkbox,
        /// highlighted without one.
        const SELECTED = 0b0000_0010;
    }
}

/// What a logical row stands for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RowKind {
    /// The synthetic select/deselect-all row (logical row 0).
    All,
    /// The option at this index of the option set.
    Option(usize),
}

/// A resolved row, ready to draw and to activate.
#[derive(Debug)]
pub struct RowView<'a, T> {
    /// Logical row index.
    pub row: usize,
    /// Synthetic or real.
    pub kind: RowKind,
    /// Text to display.
    pub label: Cow<'a, str>,
    /// Checkbox and selection state.
    pub flags: RowFlags,
    /// Change requested when the row is activated.
    pub activation: Toggle<'a, T>,
}

impl<T> RowView<'_, T> {
    /// Checkbox shown and ticked.
    pub fn is_checked(&self) -> bool {
        self.flags.contains(RowFlags::CHECKBOX | RowFlags::SELECTED)
    }

    /// No checkbox, but the row is the current single selection.
    pub fn is_highlighted(&self) -> bool {
        !self.flags.contains(RowFlags::CHECKBOX) && self.flags.contains(RowFlags::SELECTED)
    }

    /// How an activation of this row propagates.
    ///
    /// Multi-select rows consume the activation so the dropdown stays open
    /// and no ancestor reacts. Single-select rows let it continue.
    pub fn outcome(&self) -> Outcome {
        if self.flags.contains(RowFlags::CHECKBOX) {
            Outcome::StopAndConsume
        } else {
            Outcome::Continue
        }
    }

    /// Replacement selection produced by activating this row.
    pub fn activate<M: OptionMapper<T>>(&self, props: &DropdownProps<'_, T, M>) -> Selection<T>
    where
        T: Clone,
    {
        props.engine().apply(props.value, self.activation)
    }
}

/// Resolve logical `row` against `props`. Returns `None` past the last row.
pub fn resolve_row<'a, T, M: OptionMapper<T>>(
    row: usize,
    props: &DropdownProps<'a, T, M>,
) -> Option<RowView<'a, T>> {
    let engine = props.engine();
    let multi = props.value.mode() == SelectMode::Multi;
    let mut flags = if multi {
        RowFlags::CHECKBOX
    } else {
        RowFlags::empty()
    };

    let Some(index) = row.checked_sub(1) else {
        let all = engine.is_all_selected(props.value);
        flags.set(RowFlags::SELECTED, all);
        let label = match (multi, all) {
            (true, true) => DESELECT_ALL_LABEL,
            (true, false) => SELECT_ALL_LABEL,
            (false, _) => ALL_LABEL,
        };
        return Some(RowView {
            row,
            kind: RowKind::All,
            label: Cow::Borrowed(label),
            flags,
            activation: Toggle::All,
        });
    };

    let option = props.options.get(index)?;
    flags.set(RowFlags::SELECTED, engine.contains(props.value, option));
    Some(RowView {
        row,
        kind: RowKind::Option(index),
        label: props.mapper.label_of(option),
        flags,
        activation: Toggle::One(option),
    })
}
