// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown widget shell: header, open state, and the mounted list.
//!
//! ## States
//!
//! A [`Dropdown`] is either closed (initial) or open. It opens and closes only
//! when the header is activated, or when its [`OutsideSignal`] reports an
//! interaction outside the dropdown. A single-select row activation is not
//! consumed by the row; the shell dismisses the dropdown when it bubbles up.
//!
//! While open, exactly one [`VirtualList`] is mounted over
//! `options.len() + 1` logical rows. While closed, no list exists at all.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::{debug, warn};
use understory_selection::{OptionMapper, SelectMode, Selection};
use understory_virtual_list::{FixedRowWindow, SlotId, VirtualList, WindowChanges};

use crate::config::DropdownConfig;
use crate::error::{ConfigError, DropdownError};
use crate::outside::{OutsideClick, OutsideSignal};
use crate::propagation::{Outcome, Part, Phase, dispatch, path_to};
use crate::props::DropdownProps;
use crate::row::{RowView, resolve_row};

/// Open/close glyph shown in the header.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Affordance {
    /// Closed: activating the header opens the list.
    Expand,
    /// Open: activating the header closes the list.
    Collapse,
}

/// Header box contents.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderView {
    /// Header rectangle in host coordinates.
    pub rect: Rect,
    /// Placeholder, labels, or the all-selected text.
    pub text: String,
    /// Open/close glyph.
    pub affordance: Affordance,
}

/// A realized row with its slot and host-space rectangle.
#[derive(Debug)]
pub struct RenderedRow<'a, T> {
    /// Recycled slot the row is drawn into.
    pub slot: SlotId,
    /// Row rectangle in host coordinates; clip to [`ListView::rect`].
    pub rect: Rect,
    /// Resolved row contents.
    pub view: RowView<'a, T>,
}

/// Mounted list contents.
#[derive(Debug)]
pub struct ListView<'a, T> {
    /// List viewport in host coordinates.
    pub rect: Rect,
    /// Height of all logical rows together.
    pub content_height: f64,
    /// Current scroll offset.
    pub scroll_offset: f64,
    /// Realized rows in ascending row order.
    pub rows: Vec<RenderedRow<'a, T>>,
    /// Rows that entered or left the window since the previous render.
    pub changes: WindowChanges,
}

/// Everything needed to draw a dropdown for one frame.
#[derive(Debug)]
pub struct DropdownView<'a, T> {
    /// Header box.
    pub header: HeaderView,
    /// Present only while open.
    pub list: Option<ListView<'a, T>>,
}

/// What handling an event did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventResult {
    /// A part of the dropdown consumed the event; hosts should not route it further.
    pub consumed: bool,
    /// A replacement selection was emitted.
    pub changed: bool,
    /// The open state flipped.
    pub open_changed: bool,
}

/// A controlled single- or multi-select dropdown.
///
/// The dropdown owns only view state: its configuration, its position, the
/// open flag (through `S`), and, while open, the virtualized list. The option
/// set and the selection are passed in as [`DropdownProps`] on every call, and
/// changes come back through the `on_change` sink.
#[derive(Debug)]
pub struct Dropdown<S = OutsideClick> {
    config: DropdownConfig,
    origin: Point,
    signal: S,
    list: Option<VirtualList>,
}

impl Dropdown<OutsideClick> {
    /// Create a closed dropdown with the default outside-click signal.
    pub fn new(config: DropdownConfig) -> Result<Self, ConfigError> {
        Self::with_signal(config, OutsideClick::new(false))
    }
}

impl<S: OutsideSignal> Dropdown<S> {
    /// Create a dropdown driven by `signal`.
    ///
    /// Fails if the configured geometry is not finite and positive. If the
    /// signal starts open, the list is mounted on the first render or event.
    pub fn with_signal(config: DropdownConfig, mut signal: S) -> Result<Self, ConfigError> {
        config.validate()?;
        signal.set_region(None);
        debug!(event = "dropdown.created", mode = ?config.mode());
        Ok(Self {
            config,
            origin: Point::ORIGIN,
            signal,
            list: None,
        })
    }

    /// Configuration.
    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// True for multi-select dropdowns.
    pub fn is_multi(&self) -> bool {
        self.config.is_multi
    }

    /// Current open state, as reported by the signal.
    pub fn is_open(&self) -> bool {
        self.signal.is_open()
    }

    /// The outside-interaction signal.
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// Mounted list, present only while open.
    pub fn list(&self) -> Option<&VirtualList> {
        self.list.as_ref()
    }

    /// Top-left corner of the header in host coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the dropdown.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        if self.list.is_some() {
            self.signal.set_region(Some(self.bounds()));
        }
    }

    /// Header rectangle in host coordinates.
    pub fn header_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            Size::new(self.config.box_size.width, self.config.header_height),
        )
    }

    /// List viewport rectangle in host coordinates (directly below the header).
    pub fn list_rect(&self) -> Rect {
        let top = Point::new(self.origin.x, self.origin.y + self.config.header_height);
        Rect::from_origin_size(top, self.config.box_size)
    }

    /// Area the dropdown occupies: the header, plus the list while mounted.
    pub fn bounds(&self) -> Rect {
        if self.list.is_some() {
            self.header_rect().union(self.list_rect())
        } else {
            self.header_rect()
        }
    }

    /// Produce the frame contents for `props`.
    ///
    /// Mounts or unmounts the list to match the open state, follows changes in
    /// the option count, and realizes only the windowed rows.
    pub fn render<'a, T, M: OptionMapper<T>>(
        &mut self,
        props: &DropdownProps<'a, T, M>,
    ) -> Result<DropdownView<'a, T>, DropdownError> {
        self.check_mode(props.value)?;
        self.sync_mount(props.row_count());

        let open = self.list.is_some();
        let header = HeaderView {
            rect: self.header_rect(),
            text: props
                .engine()
                .display_text(props.value, &self.config.placeholder)
                .into_owned(),
            affordance: if open {
                Affordance::Collapse
            } else {
                Affordance::Expand
            },
        };

        let list_rect = self.list_rect();
        let list = self.list.as_mut().map(|list| {
            let changes = list.realize();
            let offset = list_rect.origin().to_vec2();
            let rows = list
                .rows()
                .filter_map(|r| {
                    Some(RenderedRow {
                        slot: r.slot,
                        rect: r.rect + offset,
                        view: resolve_row(r.row, props)?,
                    })
                })
                .collect();
            ListView {
                rect: list_rect,
                content_height: list.window().content_height(),
                scroll_offset: list.window().scroll_offset(),
                rows,
                changes,
            }
        });

        Ok(DropdownView { header, list })
    }

    /// Handle a pointer press at `pt` (host coordinates).
    ///
    /// At most one replacement selection is passed to `on_change`, before this
    /// returns. Every press should be forwarded, including presses far away
    /// from the dropdown: those are what close it.
    pub fn pointer_down<T: Clone, M: OptionMapper<T>>(
        &mut self,
        pt: Point,
        props: &DropdownProps<'_, T, M>,
        on_change: &mut impl FnMut(Selection<T>),
    ) -> Result<EventResult, DropdownError> {
        let mode = self.check_mode(props.value)?;
        let row_count = props.row_count();
        self.sync_mount(row_count);

        let was_open = self.signal.is_open();
        let path = path_to(self.hit_test(pt));
        let signal = &mut self.signal;
        let mut next = None;
        let mut activated = false;

        let consumed = dispatch(&path, |phase, part| match (phase, part) {
            (Phase::Capture, Part::Root) => {
                if signal.observe(pt) {
                    debug!(event = "dropdown.dismissed", reason = "outside");
                }
                Outcome::Continue
            }
            (Phase::Target, Part::Header) => {
                signal.set_open(!was_open);
                Outcome::StopAndConsume
            }
            (Phase::Target, Part::Row(row)) => match resolve_row(row, props) {
                Some(view) => {
                    next = Some(view.activate(props));
                    activated = true;
                    view.outcome()
                }
                None => Outcome::Continue,
            },
            (Phase::Bubble, Part::Shell) if activated => {
                // Only unconsumed (single-select) activations get here.
                signal.set_open(false);
                debug!(event = "dropdown.dismissed", reason = "chosen");
                Outcome::Continue
            }
            _ => Outcome::Continue,
        });

        let open_changed = self.signal.is_open() != was_open;
        self.sync_mount(row_count);

        let changed = next.is_some();
        if let Some(value) = next {
            debug!(event = "dropdown.selection.emitted", mode = ?mode, empty = value.is_empty());
            on_change(value);
        }
        Ok(EventResult {
            consumed,
            changed,
            open_changed,
        })
    }

    /// Scroll the mounted list by `delta` pixels. Returns true if it moved.
    pub fn scroll(&mut self, delta: f64) -> bool {
        self.list
            .as_mut()
            .is_some_and(|list| list.window_mut().scroll_by(delta))
    }

    /// Scroll the mounted list so logical `row` is fully visible.
    pub fn scroll_to_row(&mut self, row: usize) -> bool {
        self.list
            .as_mut()
            .is_some_and(|list| list.window_mut().scroll_to_row(row))
    }

    fn check_mode<T>(&self, value: &Selection<T>) -> Result<SelectMode, DropdownError> {
        let expected = self.config.mode();
        let found = value.mode();
        if expected != found {
            warn!(event = "dropdown.mode_mismatch", ?expected, ?found);
            return Err(DropdownError::ModeMismatch { expected, found });
        }
        Ok(expected)
    }

    fn hit_test(&self, pt: Point) -> Part {
        if self.header_rect().contains(pt) {
            return Part::Header;
        }
        if let Some(list) = &self.list {
            let rect = self.list_rect();
            if rect.contains(pt) {
                let local = pt - rect.origin().to_vec2();
                return list.window().row_at(local).map_or(Part::List, Part::Row);
            }
        }
        Part::Root
    }

    fn sync_mount(&mut self, row_count: usize) {
        if !self.signal.is_open() {
            if self.list.take().is_some() {
                self.signal.set_region(None);
                debug!(event = "dropdown.list.unmounted");
            }
            return;
        }
        if let Some(list) = &mut self.list {
            if list.window().row_count() != row_count {
                list.window_mut().set_row_count(row_count);
            }
            return;
        }
        let window = FixedRowWindow::new(row_count, self.config.row_height, self.config.box_size)
            .with_overscan(self.config.overscan);
        self.list = Some(VirtualList::new(window));
        self.signal.set_region(Some(self.bounds()));
        debug!(event = "dropdown.list.mounted", rows = row_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PLACEHOLDER;
    use alloc::format;
    use alloc::vec;
    use understory_selection::{ALL_SELECTED_TEXT, SingleSelection};

    const XYZ: [&str; 3] = ["x", "y", "z"];
    const HEADER: Point = Point::new(10.0, 20.0);
    const FAR_AWAY: Point = Point::new(2_000.0, 2_000.0);

    /// Center of logical `row` with the list scrolled to the top.
    fn row_point(row: usize) -> Point {
        Point::new(100.0, 56.0 + row as f64 * 55.0 + 27.5)
    }

    /// Press at `pt`, apply any emitted value to `value` like a controlling
    /// caller would, and return what was emitted.
    fn press<S: OutsideSignal>(
        dd: &mut Dropdown<S>,
        pt: Point,
        options: &[&'static str],
        value: &mut Selection<&'static str>,
    ) -> (EventResult, Option<Selection<&'static str>>) {
        let mut emitted = None;
        let props = DropdownProps::new(options, &*value);
        let res = dd
            .pointer_down(pt, &props, &mut |v| emitted = Some(v))
            .unwrap();
        if let Some(v) = &emitted {
            *value = v.clone();
        }
        (res, emitted)
    }

    fn header_text(
        dd: &mut Dropdown,
        options: &[&'static str],
        value: &Selection<&'static str>,
    ) -> String {
        dd.render(&DropdownProps::new(options, value)).unwrap().header.text
    }

    #[test]
    fn multi_toggle_one_row_twice() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut value = Selection::multi([]);
        let (res, _) = press(&mut dd, HEADER, &XYZ, &mut value);
        assert!(res.consumed && res.open_changed);
        assert!(dd.is_open());

        let (res, emitted) = press(&mut dd, row_point(2), &XYZ, &mut value);
        assert_eq!(emitted, Some(Selection::multi(["y"])));
        assert!(res.consumed, "multi-select rows consume the activation");
        assert!(dd.is_open(), "multi-select stays open");

        let (_, emitted) = press(&mut dd, row_point(2), &XYZ, &mut value);
        assert_eq!(emitted, Some(Selection::multi([])));
        assert!(dd.is_open());
    }

    #[test]
    fn multi_select_all_row_twice() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut value = Selection::multi([]);
        let _ = press(&mut dd, HEADER, &XYZ, &mut value);
        let (_, emitted) = press(&mut dd, row_point(0), &XYZ, &mut value);
        assert_eq!(emitted, Some(Selection::multi(XYZ)));
        let (_, emitted) = press(&mut dd, row_point(0), &XYZ, &mut value);
        assert_eq!(emitted, Some(Selection::multi([])));
        assert!(dd.is_open());
    }

    #[test]
    fn single_choice_emits_value_then_all_sentinel() {
        let mut dd = Dropdown::new(DropdownConfig::single()).unwrap();
        let mut value = Selection::single("y");

        let _ = press(&mut dd, HEADER, &XYZ, &mut value);
        let (res, emitted) = press(&mut dd, row_point(3), &XYZ, &mut value);
        assert_eq!(emitted, Some(Selection::single("z")));
        assert!(!res.consumed, "single-select activations propagate");
        assert!(!dd.is_open(), "single-select closes after a choice");
        assert!(dd.list().is_none());

        let _ = press(&mut dd, HEADER, &XYZ, &mut value);
        let (_, emitted) = press(&mut dd, row_point(0), &XYZ, &mut value);
        assert_eq!(emitted, Some(Selection::Single(SingleSelection::All)));
        assert_eq!(header_text(&mut dd, &XYZ, &value), "All");
    }

    #[test]
    fn empty_selection_shows_configured_placeholder() {
        let mut dd = Dropdown::new(DropdownConfig::multi().with_placeholder("Pick one")).unwrap();
        assert_eq!(header_text(&mut dd, &XYZ, &Selection::multi([])), "Pick one");

        let mut single = Dropdown::new(DropdownConfig::single()).unwrap();
        let empty = Selection::Single(SingleSelection::Empty);
        assert_eq!(header_text(&mut single, &XYZ, &empty), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn full_selection_shows_all_values_text() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        assert_eq!(
            header_text(&mut dd, &XYZ, &Selection::multi(XYZ)),
            ALL_SELECTED_TEXT
        );
        assert_eq!(
            header_text(&mut dd, &XYZ, &Selection::multi(["z", "x"])),
            "z,x"
        );
    }

    #[test]
    fn header_toggles_open_and_closed() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut value = Selection::multi([]);
        assert!(!dd.is_open());
        let _ = press(&mut dd, HEADER, &XYZ, &mut value);
        assert!(dd.is_open());
        let (res, emitted) = press(&mut dd, HEADER, &XYZ, &mut value);
        assert!(!dd.is_open());
        assert!(res.open_changed);
        assert_eq!(emitted, None);
    }

    #[test]
    fn outside_press_closes_without_emitting() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut value = Selection::multi(["x"]);
        let _ = press(&mut dd, HEADER, &XYZ, &mut value);
        let (res, emitted) = press(&mut dd, FAR_AWAY, &XYZ, &mut value);
        assert!(!dd.is_open());
        assert!(res.open_changed && !res.consumed && !res.changed);
        assert_eq!(emitted, None);
        assert_eq!(value, Selection::multi(["x"]));
    }

    #[test]
    fn presses_below_the_header_do_nothing_while_closed() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut value = Selection::multi([]);
        let (res, emitted) = press(&mut dd, row_point(1), &XYZ, &mut value);
        assert_eq!(res, EventResult::default());
        assert_eq!(emitted, None);
        assert!(!dd.is_open());
    }

    #[test]
    fn blank_list_area_keeps_dropdown_open() {
        let mut dd = Dropdown::new(DropdownConfig::single()).unwrap();
        let options = ["only"];
        let mut value = Selection::single("only");
        let _ = press(&mut dd, HEADER, &options, &mut value);
        // Two logical rows (110 px) inside a 230 px list.
        let (res, emitted) = press(&mut dd, Point::new(100.0, 56.0 + 200.0), &options, &mut value);
        assert_eq!(emitted, None);
        assert!(!res.open_changed);
        assert!(dd.is_open());
    }

    #[test]
    fn closed_dropdown_has_no_list_at_all() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let value = Selection::multi([]);
        let view = dd.render(&DropdownProps::new(&XYZ, &value)).unwrap();
        assert!(view.list.is_none());
        assert_eq!(view.header.affordance, Affordance::Expand);
        assert!(dd.list().is_none());
        assert_eq!(dd.bounds(), dd.header_rect());
    }

    #[test]
    fn open_render_resolves_synthetic_and_real_rows() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut value = Selection::multi(["z"]);
        let _ = press(&mut dd, HEADER, &XYZ, &mut value);
        let view = dd.render(&DropdownProps::new(&XYZ, &value)).unwrap();
        assert_eq!(view.header.affordance, Affordance::Collapse);
        let list = view.list.unwrap();
        let labels: Vec<_> = list.rows.iter().map(|r| r.view.label.as_ref()).collect();
        assert_eq!(labels, ["Select All", "x", "y", "z"]);
        assert!(list.rows[3].view.is_checked());
        assert_eq!(list.rows[0].rect, Rect::new(0.0, 56.0, 320.0, 111.0));
        assert_eq!(list.changes.realized.len(), 4);
    }

    #[test]
    fn large_option_sets_realize_a_bounded_window() {
        let options: Vec<String> = (0..100_000).map(|i| format!("option-{i}")).collect();
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let value = Selection::<String>::multi([]);
        let props = DropdownProps::new(&options, &value);
        let _ = dd.pointer_down(HEADER, &props, &mut |_| {}).unwrap();

        let view = dd.render(&props).unwrap();
        let list = view.list.unwrap();
        assert!(list.rows.len() <= 10, "realized {} rows", list.rows.len());
        assert_eq!(list.content_height, 100_001.0 * 55.0);

        assert!(dd.scroll(55.0 * 50_000.0));
        let view = dd.render(&props).unwrap();
        let list = view.list.unwrap();
        assert!(list.rows.len() <= 10);
        let first_visible = list
            .rows
            .iter()
            .find(|r| r.rect.y0 >= list.rect.y0)
            .unwrap();
        assert_eq!(first_visible.view.label, "option-49999");
        assert!(dd.list().unwrap().slots().allocated() <= 10);
    }

    #[test]
    fn rows_are_hit_tested_after_scrolling() {
        let options: Vec<String> = (0..1_000).map(|i| format!("o{i}")).collect();
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let value = Selection::<String>::multi([]);
        let props = DropdownProps::new(&options, &value);
        let _ = dd.pointer_down(HEADER, &props, &mut |_| {}).unwrap();
        assert!(dd.scroll_to_row(500));

        let mut emitted = None;
        let row_500_top = 56.0 + 500.0 * 55.0 - dd.list().unwrap().window().scroll_offset();
        let pt = Point::new(5.0, row_500_top + 1.0);
        let _ = dd
            .pointer_down(pt, &props, &mut |v| emitted = Some(v))
            .unwrap();
        assert_eq!(emitted, Some(Selection::multi([String::from("o499")])));
    }

    #[test]
    fn shrinking_option_set_follows_without_reset() {
        let many: Vec<String> = (0..500).map(|i| format!("{i}")).collect();
        let few: Vec<String> = many[..3].to_vec();
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let value = Selection::multi(few.clone());
        let _ = dd
            .pointer_down(HEADER, &DropdownProps::new(&many, &value), &mut |_| {})
            .unwrap();
        let _ = dd.scroll(1e9);

        let view = dd.render(&DropdownProps::new(&few, &value)).unwrap();
        let list = view.list.unwrap();
        assert_eq!(list.scroll_offset, 0.0);
        assert_eq!(list.rows.len(), 4);
        assert_eq!(list.rows[0].view.label, "Deselect All");
        assert_eq!(view.header.text, ALL_SELECTED_TEXT);

        let view = dd.render(&DropdownProps::new(&many, &value)).unwrap();
        assert_eq!(view.header.text, "0,1,2");
    }

    #[test]
    fn mode_mismatch_is_reported_and_ignored() {
        let mut dd = Dropdown::new(DropdownConfig::multi()).unwrap();
        let value = Selection::single("x");
        let props = DropdownProps::new(&XYZ, &value);
        let mut calls = 0;
        let err = dd
            .pointer_down(HEADER, &props, &mut |_| calls += 1)
            .unwrap_err();
        assert_eq!(
            err,
            DropdownError::ModeMismatch {
                expected: SelectMode::Multi,
                found: SelectMode::Single
            }
        );
        assert_eq!(calls, 0);
        assert!(!dd.is_open());
        assert!(dd.render(&props).is_err());
    }

    #[test]
    fn invalid_geometry_fails_construction() {
        let err = Dropdown::new(DropdownConfig::default().with_row_height(-3.0)).unwrap_err();
        assert_eq!(err, ConfigError::RowHeight(-3.0));
    }

    #[test]
    fn moving_the_dropdown_moves_its_region() {
        let mut dd = Dropdown::new(DropdownConfig::single()).unwrap();
        dd.set_origin(Point::new(400.0, 0.0));
        let mut value = Selection::single("x");
        // The old header position is now outside.
        let (res, _) = press(&mut dd, HEADER, &XYZ, &mut value);
        assert!(!res.consumed);
        let _ = press(&mut dd, Point::new(410.0, 20.0), &XYZ, &mut value);
        assert!(dd.is_open());
        assert_eq!(dd.signal().region(), Some(dd.bounds()));
        dd.set_origin(Point::new(0.0, 0.0));
        assert_eq!(dd.signal().region(), Some(dd.bounds()));
    }

    #[test]
    fn two_instances_close_independently() {
        let mut left = Dropdown::new(DropdownConfig::multi()).unwrap();
        let mut right = Dropdown::new(DropdownConfig::single()).unwrap();
        right.set_origin(Point::new(400.0, 0.0));
        let mut multi = Selection::multi([]);
        let mut single = Selection::single("x");

        let _ = press(&mut left, HEADER, &XYZ, &mut multi);
        assert!(left.is_open());
        // Opening the right dropdown is an outside press for the left one.
        let right_header = Point::new(410.0, 20.0);
        let _ = press(&mut left, right_header, &XYZ, &mut multi);
        let _ = press(&mut right, right_header, &XYZ, &mut single);
        assert!(!left.is_open());
        assert!(right.is_open());
    }

    #[test]
    fn signal_may_start_open() {
        let mut dd =
            Dropdown::with_signal(DropdownConfig::multi(), OutsideClick::new(true)).unwrap();
        let value = Selection::multi(vec!["x"]);
        let view = dd.render(&DropdownProps::new(&XYZ, &value)).unwrap();
        assert!(view.list.is_some());
    }
}
