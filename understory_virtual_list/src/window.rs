// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-height row window: scroll offset, visible range, and row geometry.

use core::ops::Range;

use kurbo::{Point, Rect, Size};

use crate::util::{rows_below, rows_covering};

/// Rows realized beyond each edge of the viewport unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Scroll and geometry state for a list whose rows all share one height.
///
/// Rows are addressed by logical index `0..row_count`. Nothing about the rows
/// themselves is stored here, so the cost of a window does not depend on the
/// number of rows.
///
/// Coordinates returned by [`FixedRowWindow::row_rect`] and accepted by
/// [`FixedRowWindow::row_at`] are relative to the viewport's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedRowWindow {
    row_count: usize,
    row_height: f64,
    viewport: Size,
    scroll_offset: f64,
    overscan: usize,
}

impl FixedRowWindow {
    /// Create a window scrolled to the top.
    ///
    /// `row_height` must be finite and positive; callers validate geometry
    /// before constructing a window.
    pub fn new(row_count: usize, row_height: f64, viewport: Size) -> Self {
        debug_assert!(
            row_height.is_finite() && row_height > 0.0,
            "row height must be finite and positive"
        );
        Self {
            row_count,
            row_height,
            viewport,
            scroll_offset: 0.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Set how many rows are realized beyond each viewport edge.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Number of logical rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Height shared by every row.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current vertical scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Rows realized beyond each viewport edge.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Total height of all rows.
    pub fn content_height(&self) -> f64 {
        self.row_count as f64 * self.row_height
    }

    /// Largest valid scroll offset.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_height() - self.viewport.height).max(0.0)
    }

    /// Change the number of rows (for example after a dataset reload).
    ///
    /// The scroll offset is clamped to the new content height.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Change the viewport size, clamping the scroll offset.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Scroll to `offset`, clamped to `0..=max_scroll_offset()`.
    ///
    /// Non-finite offsets are ignored. Returns true if the offset changed.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            return false;
        }
        let clamped = offset.clamp(0.0, self.max_scroll_offset());
        let changed = clamped != self.scroll_offset;
        self.scroll_offset = clamped;
        changed
    }

    /// Scroll by `delta` (positive scrolls down). Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.set_scroll_offset(self.scroll_offset + delta)
    }

    /// Scroll the least amount needed for `row` to be fully visible.
    ///
    /// Rows out of range are ignored. Returns true if the offset changed.
    pub fn scroll_to_row(&mut self, row: usize) -> bool {
        if row >= self.row_count {
            return false;
        }
        let top = row as f64 * self.row_height;
        let bottom = top + self.row_height;
        if top < self.scroll_offset {
            self.set_scroll_offset(top)
        } else if bottom > self.scroll_offset + self.viewport.height {
            self.set_scroll_offset(bottom - self.viewport.height)
        } else {
            false
        }
    }

    /// Rows that intersect the viewport band, without overscan.
    pub fn visible_range(&self) -> Range<usize> {
        if self.row_count == 0 || self.viewport.height.is_nan() || self.viewport.height <= 0.0 {
            return 0..0;
        }
        let start = rows_below(self.scroll_offset, self.row_height).min(self.row_count);
        let end = rows_covering(self.scroll_offset + self.viewport.height, self.row_height)
            .min(self.row_count);
        start..end.max(start)
    }

    /// Rows to realize: [`Self::visible_range`] widened by the overscan on both
    /// sides and clamped to the row count.
    pub fn window_range(&self) -> Range<usize> {
        let visible = self.visible_range();
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible
            .end
            .saturating_add(self.overscan)
            .min(self.row_count);
        start..end
    }

    /// Upper bound on [`Self::window_range`] length for the current viewport,
    /// independent of the row count and scroll offset.
    pub fn max_window_len(&self) -> usize {
        rows_covering(self.viewport.height, self.row_height)
            .saturating_add(1)
            .saturating_add(self.overscan.saturating_mul(2))
    }

    /// Rectangle of `row` in viewport coordinates. May lie outside the viewport.
    pub fn row_rect(&self, row: usize) -> Rect {
        let y0 = row as f64 * self.row_height - self.scroll_offset;
        Rect::new(0.0, y0, self.viewport.width, y0 + self.row_height)
    }

    /// Row under `pt` (viewport coordinates), if any.
    pub fn row_at(&self, pt: Point) -> Option<usize> {
        let band = Rect::from_origin_size(Point::ORIGIN, self.viewport);
        if !band.contains(pt) {
            return None;
        }
        let row = rows_below(pt.y + self.scroll_offset, self.row_height);
        (row < self.row_count).then_some(row)
    }
}
