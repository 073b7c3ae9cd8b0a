// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range-calendar state machine: anchored two-step selection and the
//! pointer-drag protocol.

use core::fmt;

use chrono::NaiveDate;

use trellis_date::{
    add, constrain_value, previous_available_date, DateDuration, DateRange,
};

use crate::calendar::{validate, CalendarState};
use crate::types::{
    Alignment, AlwaysAvailable, CalendarConfig, CalendarError, DateAvailability,
    RangeCalendarConfig,
};

/// Contiguous span of selectable dates around an anchor, both ends inclusive
/// when present. `None` on a side means unbounded on that side.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AvailableRange {
    /// Earliest date the in-progress range may reach.
    pub start: Option<NaiveDate>,
    /// Latest date the in-progress range may reach.
    pub end: Option<NaiveDate>,
}

/// Headless range calendar.
///
/// Selection is a two-step gesture: the first selection sets an *anchor*, the
/// second commits the span between anchor and the selected date (in either
/// order). While anchored, moving focus highlights the prospective range, and
/// unless non-contiguous ranges are allowed the range may not grow across an
/// unavailable date.
///
/// Pointer interaction layers a drag protocol on top: pressing a highlight
/// endpoint re-anchors to the opposite end so the range can be resized, and a
/// release anywhere commits whatever is highlighted (see
/// [`finalize_pending_selection`](Self::finalize_pending_selection)).
pub struct RangeCalendarState<A = AlwaysAvailable> {
    base: CalendarState<A>,
    value: Option<DateRange>,
    anchor_date: Option<NaiveDate>,
    available_range: AvailableRange,
    allows_non_contiguous: bool,
    dragging: bool,
    reanchored: bool,
}

impl<A> fmt::Debug for RangeCalendarState<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCalendarState")
            .field("base", &self.base)
            .field("value", &self.value)
            .field("anchor_date", &self.anchor_date)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl RangeCalendarState<AlwaysAvailable> {
    /// Create a range calendar where every in-bounds date is selectable.
    pub fn new(config: RangeCalendarConfig) -> Result<Self, CalendarError> {
        Self::with_availability(config, AlwaysAvailable)
    }
}

impl<A: DateAvailability> RangeCalendarState<A> {
    /// Create a range calendar with a host-supplied availability predicate.
    ///
    /// The visible range centers on the committed range's start; when the
    /// range's end spills past one page from that centered start, alignment
    /// falls back to start so the range's beginning stays visible.
    pub fn with_availability(
        config: RangeCalendarConfig,
        availability: A,
    ) -> Result<Self, CalendarError> {
        validate(config.visible_duration, config.min_value, config.max_value)?;
        let mut alignment = Alignment::Center;
        if let Some(range) = config.value {
            let centered = trellis_date::align_center(
                range.start,
                config.visible_duration,
                config.first_day_of_week,
                config.min_value,
                config.max_value,
            );
            if range.end > add(centered, config.visible_duration) {
                alignment = Alignment::Start;
            }
        }
        let base = CalendarState::with_availability(
            CalendarConfig {
                value: None,
                focused_value: config.focused_value.or(config.value.map(|range| range.start)),
                placeholder_value: config.placeholder_value,
                min_value: config.min_value,
                max_value: config.max_value,
                visible_duration: config.visible_duration,
                alignment,
                first_day_of_week: config.first_day_of_week,
                disabled: config.disabled,
                read_only: config.read_only,
            },
            availability,
        )?;
        Ok(Self {
            base,
            value: config.value,
            anchor_date: None,
            available_range: AvailableRange::default(),
            allows_non_contiguous: config.allows_non_contiguous_ranges,
            dragging: false,
            reanchored: false,
        })
    }

    /// The underlying single-date state: visible range, bounds, focus flags.
    pub fn base(&self) -> &CalendarState<A> {
        &self.base
    }

    /// The committed range, if any.
    pub fn value(&self) -> Option<DateRange> {
        self.value
    }

    /// Replace the committed range directly (controlled usage).
    pub fn set_value(&mut self, value: Option<DateRange>) {
        if self.value != value {
            self.base.note_change();
        }
        self.value = value;
    }

    /// The pending anchor, set by the first half of a selection gesture.
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_date
    }

    /// Contiguity limits around the current anchor. Unbounded when there is
    /// no anchor or non-contiguous ranges are allowed.
    pub fn available_range(&self) -> AvailableRange {
        self.available_range
    }

    /// True while a pointer drag is extending the range.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True if an in-progress range may span unavailable dates.
    pub fn allows_non_contiguous_ranges(&self) -> bool {
        self.allows_non_contiguous
    }

    /// Counter of observable state changes, shared with the base state.
    pub fn epoch(&self) -> u64 {
        self.base.epoch()
    }

    /// The date keyboard navigation is on.
    pub fn focused_date(&self) -> NaiveDate {
        self.base.focused_date()
    }

    /// The currently visible page, both ends inclusive.
    pub fn visible_range(&self) -> DateRange {
        self.base.visible_range()
    }

    /// Record whether the grid has keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.base.set_focused(focused);
    }

    /// Drain the pending platform-focus request. See
    /// [`CalendarState::take_focus_intent`].
    pub fn take_focus_intent(&mut self) -> Option<NaiveDate> {
        self.base.take_focus_intent()
    }

    /// The range a renderer should highlight: anchor-to-focus while a
    /// selection is in progress, otherwise the committed range.
    pub fn highlighted_range(&self) -> Option<DateRange> {
        match self.anchor_date {
            Some(anchor) => Some(DateRange::between(anchor, self.base.focused_date())),
            None => self.value,
        }
    }

    /// Advance the two-step selection gesture.
    ///
    /// Without an anchor this sets one; with an anchor it commits the span
    /// between anchor and `date` and clears the anchor. Unavailable dates
    /// walk backward as in [`CalendarState::select_date`].
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.base.is_disabled() || self.base.is_read_only() {
            return;
        }
        let date = constrain_value(date, self.base.min_value(), self.base.max_value());
        let base = &self.base;
        let Some(date) = previous_available_date(date, base.visible_range().start, |d| {
            base.is_cell_unavailable(d)
        }) else {
            return;
        };
        match self.anchor_date {
            None => self.set_anchor(Some(date)),
            Some(anchor) => {
                self.set_value(Some(DateRange::between(anchor, date)));
                self.set_anchor(None);
            }
        }
    }

    /// Select the focused date.
    pub fn select_focused_date(&mut self) {
        self.select_date(self.base.focused_date());
    }

    /// Extend the highlight toward `date` by moving focus. A no-op unless a
    /// selection is in progress.
    pub fn highlight_date(&mut self, date: NaiveDate) {
        if self.anchor_date.is_some() {
            self.set_focused_date(date);
        }
    }

    /// True if `date` cannot take part in the current selection: outside the
    /// min/max bounds, or outside the contiguous span around the anchor.
    pub fn is_invalid(&self, date: NaiveDate) -> bool {
        let min = opt_max(self.base.min_value(), self.available_range.start);
        let max = opt_min(self.base.max_value(), self.available_range.end);
        trellis_date::is_invalid(date, min, max)
    }

    /// True if `date` renders as part of the highlighted range.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.highlighted_range()
            .is_some_and(|range| range.contains(date))
            && !self.is_cell_disabled(date)
            && !self.is_cell_unavailable(date)
    }

    /// See [`CalendarState::is_cell_focused`].
    pub fn is_cell_focused(&self, date: NaiveDate) -> bool {
        self.base.is_cell_focused(date)
    }

    /// True if `date`'s cell cannot be interacted with, additionally counting
    /// the anchored contiguity limits.
    pub fn is_cell_disabled(&self, date: NaiveDate) -> bool {
        self.base.is_cell_disabled(date) || self.is_invalid(date)
    }

    /// See [`CalendarState::is_cell_unavailable`].
    pub fn is_cell_unavailable(&self, date: NaiveDate) -> bool {
        self.base.is_cell_unavailable(date)
    }

    /// Pointer press on `date`.
    ///
    /// Pressing an endpoint of the existing highlight re-anchors to the
    /// opposite endpoint so the drag resizes the range; any other press
    /// starts a fresh selection at `date`. Touch presses should be routed
    /// here only after [`TOUCH_DRAG_DELAY_MS`](crate::TOUCH_DRAG_DELAY_MS)
    /// (see [`DragActivation`](crate::DragActivation)); an expired tap goes
    /// through [`select_date`](Self::select_date) instead.
    pub fn begin_pointer_selection(&mut self, date: NaiveDate) {
        if self.base.is_disabled() || self.base.is_read_only() {
            return;
        }
        self.reanchored = false;
        if self.anchor_date.is_none()
            && let Some(range) = self.highlighted_range()
            && !self.is_invalid(date)
            && (date == range.start || date == range.end)
        {
            let opposite = if date == range.start { range.end } else { range.start };
            self.set_anchor(Some(opposite));
            self.reanchored = true;
        } else {
            self.select_date(date);
        }
        self.dragging = true;
        self.base.note_change();
        self.set_focused_date(date);
    }

    /// Pointer moved onto `date` while dragging.
    pub fn update_pointer_selection(&mut self, date: NaiveDate) {
        if self.dragging {
            self.highlight_date(date);
        }
    }

    /// Pointer released on `date`'s cell.
    ///
    /// A fresh press-and-release on a single date leaves the anchor pending
    /// (click, then click again elsewhere to commit); a drag or a re-anchored
    /// press commits on release.
    pub fn finish_pointer_selection(&mut self, date: NaiveDate) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.base.note_change();
        let Some(anchor) = self.anchor_date else {
            self.reanchored = false;
            return;
        };
        if !self.reanchored && date == anchor {
            return;
        }
        self.reanchored = false;
        self.select_date(date);
    }

    /// Pointer released outside the grid, or the interaction was cancelled.
    ///
    /// Commits the highlighted range at the focused date so a drag that ends
    /// off-grid still lands, unless the release happened on a navigation
    /// control (`released_on_navigation`), where committing would fight the
    /// page turn the user asked for.
    pub fn finalize_pending_selection(&mut self, released_on_navigation: bool) {
        if self.dragging {
            self.dragging = false;
            self.base.note_change();
        }
        self.reanchored = false;
        if released_on_navigation {
            return;
        }
        if self.anchor_date.is_some() {
            self.select_focused_date();
        }
    }

    /// See [`CalendarState::set_focused_date`].
    pub fn set_focused_date(&mut self, date: NaiveDate) {
        self.navigate(|base| base.set_focused_date(date));
    }

    /// See [`CalendarState::focus_next_day`].
    pub fn focus_next_day(&mut self) {
        self.navigate(CalendarState::focus_next_day);
    }

    /// See [`CalendarState::focus_previous_day`].
    pub fn focus_previous_day(&mut self) {
        self.navigate(CalendarState::focus_previous_day);
    }

    /// See [`CalendarState::focus_next_row`].
    pub fn focus_next_row(&mut self) {
        self.navigate(CalendarState::focus_next_row);
    }

    /// See [`CalendarState::focus_previous_row`].
    pub fn focus_previous_row(&mut self) {
        self.navigate(CalendarState::focus_previous_row);
    }

    /// See [`CalendarState::focus_next_page`].
    pub fn focus_next_page(&mut self) {
        self.navigate(CalendarState::focus_next_page);
    }

    /// See [`CalendarState::focus_previous_page`].
    pub fn focus_previous_page(&mut self) {
        self.navigate(CalendarState::focus_previous_page);
    }

    /// See [`CalendarState::focus_section_start`].
    pub fn focus_section_start(&mut self) {
        self.navigate(CalendarState::focus_section_start);
    }

    /// See [`CalendarState::focus_section_end`].
    pub fn focus_section_end(&mut self) {
        self.navigate(CalendarState::focus_section_end);
    }

    /// See [`CalendarState::focus_next_section`].
    pub fn focus_next_section(&mut self, larger: bool) {
        self.navigate(|base| base.focus_next_section(larger));
    }

    /// See [`CalendarState::focus_previous_section`].
    pub fn focus_previous_section(&mut self, larger: bool) {
        self.navigate(|base| base.focus_previous_section(larger));
    }

    fn set_anchor(&mut self, anchor: Option<NaiveDate>) {
        if self.anchor_date != anchor {
            self.base.note_change();
        }
        self.anchor_date = anchor;
        self.refresh_available_range();
    }

    // The contiguity span is computed against the visible page, so page
    // navigation while anchored must recompute it.
    fn navigate(&mut self, op: impl FnOnce(&mut CalendarState<A>)) {
        let before = self.base.visible_range().start;
        op(&mut self.base);
        if self.base.visible_range().start != before {
            self.refresh_available_range();
        }
    }

    fn refresh_available_range(&mut self) {
        let next = match self.anchor_date {
            Some(anchor) if !self.allows_non_contiguous => AvailableRange {
                start: self.nearest_unavailable_boundary(anchor, -1),
                end: self.nearest_unavailable_boundary(anchor, 1),
            },
            _ => AvailableRange::default(),
        };
        if next != self.available_range {
            self.available_range = next;
            self.base.note_change();
        }
    }

    /// Last available date walking from `anchor` in `dir` before hitting an
    /// unavailable one, or `None` when the walk exits the visible range
    /// without finding any.
    fn nearest_unavailable_boundary(&self, anchor: NaiveDate, dir: i32) -> Option<NaiveDate> {
        let range = self.base.visible_range();
        let step = DateDuration::of_days(dir);
        let mut date = add(anchor, step);
        while range.contains(date) && !self.base.is_cell_unavailable(date) {
            date = add(date, step);
        }
        if self.base.is_cell_unavailable(date) {
            Some(add(date, -step))
        } else {
            None
        }
    }
}

fn opt_max(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (some, None) | (None, some) => some,
    }
}

fn opt_min(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (some, None) | (None, some) => some,
    }
}
