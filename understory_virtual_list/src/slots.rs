// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row slot recycling.
//!
//! A slot stands for one realized row element (a widget, a cached text layout,
//! a retained display-list node). As the window scrolls, rows that leave it give
//! their slot back and rows that enter it take a free slot, so the number of
//! slots ever allocated is bounded by the largest window, not by the row count.

use alloc::vec::Vec;
use core::ops::Range;

/// Handle of a recyclable row slot.
///
/// Unlike a generational id, a `SlotId` is meant to be reused: the same slot
/// shows different rows over time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SlotId(u32);

impl SlotId {
    /// Slot index, dense from zero.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Rows that entered or left the window during [`SlotPool::sync`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowChanges {
    /// Rows newly bound to a slot, in ascending row order.
    pub realized: Vec<(usize, SlotId)>,
    /// Rows whose slot was released, in ascending row order.
    pub released: Vec<(usize, SlotId)>,
}

impl WindowChanges {
    /// True if no row entered or left the window.
    pub fn is_empty(&self) -> bool {
        self.realized.is_empty() && self.released.is_empty()
    }
}

/// Binds a contiguous range of rows to recycled slots.
#[derive(Clone, Debug, Default)]
pub struct SlotPool {
    // (row, slot), ascending by row and contiguous.
    bound: Vec<(usize, SlotId)>,
    free_list: Vec<SlotId>,
    allocated: u32,
}

impl SlotPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently bound.
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// True if no row is bound.
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Number of distinct slots ever allocated.
    pub fn allocated(&self) -> usize {
        self.allocated as usize
    }

    /// Rows currently bound, as a range.
    pub fn range(&self) -> Range<usize> {
        match (self.bound.first(), self.bound.last()) {
            (Some(&(first, _)), Some(&(last, _))) => first..last + 1,
            _ => 0..0,
        }
    }

    /// Slot bound to `row`, if the row is realized.
    pub fn slot_of(&self, row: usize) -> Option<SlotId> {
        let first = self.bound.first()?.0;
        let (r, slot) = *self.bound.get(row.checked_sub(first)?)?;
        debug_assert_eq!(r, row, "bound rows are contiguous");
        Some(slot)
    }

    /// Iterate `(row, slot)` pairs in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, SlotId)> + '_ {
        self.bound.iter().copied()
    }

    /// Bind exactly the rows in `range`, reusing slots of rows that stay and
    /// recycling slots of rows that leave.
    pub fn sync(&mut self, range: Range<usize>) -> WindowChanges {
        let mut changes = WindowChanges::default();
        let mut kept = Vec::with_capacity(range.len());
        for &(row, slot) in &self.bound {
            if range.contains(&row) {
                kept.push((row, slot));
            } else {
                self.free_list.push(slot);
                changes.released.push((row, slot));
            }
        }

        let mut next = Vec::with_capacity(range.len());
        let mut kept = kept.into_iter().peekable();
        for row in range {
            if let Some(&(r, slot)) = kept.peek()
                && r == row
            {
                next.push((r, slot));
                let _ = kept.next();
                continue;
            }
            let slot = self.acquire();
            changes.realized.push((row, slot));
            next.push((row, slot));
        }
        self.bound = next;
        changes
    }

    /// Release every bound row.
    pub fn clear(&mut self) -> WindowChanges {
        self.sync(0..0)
    }

    fn acquire(&mut self) -> SlotId {
        if let Some(slot) = self.free_list.pop() {
            return slot;
        }
        let slot = SlotId(self.allocated);
        self.allocated = self.allocated.saturating_add(1);
        slot
    }
}
