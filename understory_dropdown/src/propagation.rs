// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event propagation through the parts of a dropdown.
//!
//! ## Overview
//!
//! A pointer interaction targets one [`Part`]. Its path runs from
//! [`Part::Root`] (where the outside-interaction signal listens) down to the
//! target, and [`dispatch`] walks it capture → target → bubble.
//!
//! Handlers return an [`Outcome`]:
//! - [`Outcome::Continue`] keeps going.
//! - [`Outcome::Stop`] skips the rest of the current phase.
//! - [`Outcome::StopAndConsume`] aborts the remaining phases and marks the
//!   event consumed, so nothing above the handler sees it.
//!
//! The dropdown's own handlers only use `Continue` and `StopAndConsume`.
//! `Stop` is there for hosts that run their own handlers through [`dispatch`],
//! for example to keep a capture-phase listener from reaching the rows.

use alloc::vec::Vec;

/// Phases of event propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root-to-target traversal.
    Capture,
    /// Target part.
    Target,
    /// Target-to-root traversal.
    Bubble,
}

/// Handler outcome controlling propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Continue within the current phase.
    Continue,
    /// Stop propagation within the current phase.
    Stop,
    /// Stop all remaining phases and mark the event consumed.
    StopAndConsume,
}

/// Addressable parts of a dropdown, plus the surrounding root.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Part {
    /// Everything outside the dropdown; the outside-interaction signal listens here.
    Root,
    /// The dropdown as a whole.
    Shell,
    /// Header box with the display text and the open/close affordance.
    Header,
    /// Mounted list region (only while open).
    List,
    /// A logical list row; row 0 is the synthetic "All" row.
    Row(usize),
}

impl Part {
    /// Containing part, or `None` for [`Part::Root`].
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::Shell => Some(Self::Root),
            Self::Header | Self::List => Some(Self::Shell),
            Self::Row(_) => Some(Self::List),
        }
    }
}

/// Root→target path for `target`.
pub fn path_to(target: Part) -> Vec<Part> {
    let mut out = Vec::new();
    let mut cur = Some(target);
    while let Some(p) = cur {
        out.push(p);
        cur = p.parent();
    }
    out.reverse();
    out
}

/// Capture → target → bubble sequence for `path`.
pub fn steps(path: &[Part]) -> Vec<(Phase, Part)> {
    let mut out = Vec::with_capacity(path.len() * 2 + 1);
    let Some(&target) = path.last() else {
        return out;
    };
    // Capture: root→target
    for &p in path {
        out.push((Phase::Capture, p));
    }
    out.push((Phase::Target, target));
    // Bubble: target→root
    for &p in path.iter().rev() {
        out.push((Phase::Bubble, p));
    }
    out
}

/// Walk the [`steps`] of `path`, calling `handler` for each one.
///
/// Returns true if a handler consumed the event.
pub fn dispatch(path: &[Part], mut handler: impl FnMut(Phase, Part) -> Outcome) -> bool {
    let seq = steps(path);
    let mut i = 0;
    while i < seq.len() {
        let (phase, part) = seq[i];
        match handler(phase, part) {
            Outcome::Continue => {}
            Outcome::Stop => {
                // Skip remaining entries in this phase.
                while i + 1 < seq.len() && seq[i + 1].0 == phase {
                    i += 1;
                }
            }
            Outcome::StopAndConsume => return true,
        }
        i += 1;
    }
    false
}
