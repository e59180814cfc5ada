// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row arithmetic that stays within `core` (no float rounding functions needed).

/// Number of whole rows of height `row_height` that fit in `extent`.
///
/// Negative or NaN extents yield zero. Saturates at `usize::MAX`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float to usize casts saturate; truncation toward zero is the floor here."
)]
pub(crate) fn rows_below(extent: f64, row_height: f64) -> usize {
    if extent.is_nan() || extent <= 0.0 {
        return 0;
    }
    (extent / row_height) as usize
}

/// Number of rows of height `row_height` needed to cover `extent`.
pub(crate) fn rows_covering(extent: f64, row_height: f64) -> usize {
    let q = rows_below(extent, row_height);
    if (q as f64) * row_height < extent {
        q.saturating_add(1)
    } else {
        q
    }
}
