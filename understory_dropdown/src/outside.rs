// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction signal: owns the open flag and closes on interactions
//! outside a region.
//!
//! The dropdown shell is the only consumer. It reports the region it occupies
//! while open and forwards every pointer interaction; the signal decides
//! whether that interaction dismisses the dropdown.

use kurbo::{Point, Rect};

/// Open/closed state that flips to closed on outside interactions.
pub trait OutsideSignal {
    /// Current open state.
    fn is_open(&self) -> bool;
    /// Set the open state.
    fn set_open(&mut self, open: bool);
    /// Region considered "inside"; `None` while nothing is mounted.
    fn set_region(&mut self, region: Option<Rect>);
    /// Observe a pointer interaction at `pt`. Closes if open and `pt` is
    /// outside the region. Returns true if this closed the signal.
    fn observe(&mut self, pt: Point) -> bool;
}

/// Default [`OutsideSignal`]: a flag plus an optional rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutsideClick {
    open: bool,
    region: Option<Rect>,
}

impl OutsideClick {
    /// Create a signal with the given initial state and no region.
    pub fn new(open: bool) -> Self {
        Self { open, region: None }
    }

    /// Region currently considered inside.
    pub fn region(&self) -> Option<Rect> {
        self.region
    }
}

impl OutsideSignal for OutsideClick {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn set_region(&mut self, region: Option<Rect>) {
        self.region = region;
    }

    fn observe(&mut self, pt: Point) -> bool {
        if !self.open {
            return false;
        }
        let inside = self.region.is_some_and(|r| r.contains(pt));
        if inside {
            return false;
        }
        self.open = false;
        true
    }
}
