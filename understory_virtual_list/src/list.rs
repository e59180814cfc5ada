// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A window paired with a slot pool.

use kurbo::Rect;

use crate::slots::{SlotId, SlotPool, WindowChanges};
use crate::window::FixedRowWindow;

/// One realized row: its logical index, its slot, and its rectangle in
/// viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RealizedRow {
    /// Logical row index.
    pub row: usize,
    /// Slot the row is bound to.
    pub slot: SlotId,
    /// Row rectangle relative to the viewport's top-left corner.
    pub rect: Rect,
}

/// Virtualized list state: a [`FixedRowWindow`] and the [`SlotPool`] that
/// realizes its window range.
///
/// Call [`VirtualList::realize`] after scrolling or resizing, then walk
/// [`VirtualList::rows`] to draw.
#[derive(Clone, Debug)]
pub struct VirtualList {
    window: FixedRowWindow,
    slots: SlotPool,
}

impl VirtualList {
    /// Create a list over `window` with nothing realized yet.
    pub fn new(window: FixedRowWindow) -> Self {
        Self {
            window,
            slots: SlotPool::new(),
        }
    }

    /// Scroll and geometry state.
    pub fn window(&self) -> &FixedRowWindow {
        &self.window
    }

    /// Mutable scroll and geometry state. Call [`Self::realize`] afterwards.
    pub fn window_mut(&mut self) -> &mut FixedRowWindow {
        &mut self.window
    }

    /// Slot bindings of the realized rows.
    pub fn slots(&self) -> &SlotPool {
        &self.slots
    }

    /// Bind slots to the current window range.
    pub fn realize(&mut self) -> WindowChanges {
        self.slots.sync(self.window.window_range())
    }

    /// Realized rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = RealizedRow> + '_ {
        self.slots.iter().map(|(row, slot)| RealizedRow {
            row,
            slot,
            rect: self.window.row_rect(row),
        })
    }
}
