// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-date calendar state machine.

use core::fmt;

use chrono::{NaiveDate, Weekday};

use trellis_date::{
    add, align_center, align_end, align_start, constrain_start, constrain_value, end_of_month,
    previous_available_date, start_of_month, subtract, DateDuration, DateRange,
};

use crate::types::{Alignment, AlwaysAvailable, CalendarConfig, CalendarError, DateAvailability};

/// Headless single-date calendar: a focused date, a visible page, an optional
/// selected value, and the keyboard operations that move between them.
///
/// The state pushes no events; every mutation bumps [`epoch`](Self::epoch)
/// when something observable changed, and hosts re-read the accessors. Focus
/// movement that should also move DOM/platform focus is surfaced through
/// [`take_focus_intent`](Self::take_focus_intent).
///
/// All operations clamp to the configured min/max bounds rather than failing;
/// only construction validates.
pub struct CalendarState<A = AlwaysAvailable> {
    availability: A,
    value: Option<NaiveDate>,
    focused_date: NaiveDate,
    start_date: NaiveDate,
    min_value: Option<NaiveDate>,
    max_value: Option<NaiveDate>,
    visible_duration: DateDuration,
    first_day_of_week: Weekday,
    disabled: bool,
    read_only: bool,
    focused: bool,
    focus_intent: Option<NaiveDate>,
    epoch: u64,
}

impl<A> fmt::Debug for CalendarState<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("value", &self.value)
            .field("focused_date", &self.focused_date)
            .field("start_date", &self.start_date)
            .field("visible_duration", &self.visible_duration)
            .finish_non_exhaustive()
    }
}

/// Shared construction checks for both calendar flavors.
pub(crate) fn validate(
    visible_duration: DateDuration,
    min_value: Option<NaiveDate>,
    max_value: Option<NaiveDate>,
) -> Result<(), CalendarError> {
    if visible_duration.is_empty() {
        return Err(CalendarError::EmptyVisibleDuration);
    }
    if visible_duration.years < 0
        || visible_duration.months < 0
        || visible_duration.weeks < 0
        || visible_duration.days < 0
    {
        return Err(CalendarError::NegativeVisibleDuration {
            duration: visible_duration,
        });
    }
    if let Some(min) = min_value
        && let Some(max) = max_value
        && min > max
    {
        return Err(CalendarError::MinAfterMax { min, max });
    }
    Ok(())
}

impl CalendarState<AlwaysAvailable> {
    /// Create a calendar where every in-bounds date is selectable.
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        Self::with_availability(config, AlwaysAvailable)
    }
}

impl<A: DateAvailability> CalendarState<A> {
    /// Create a calendar with a host-supplied availability predicate.
    ///
    /// The initial focus is `focused_value`, else `value`, else
    /// `placeholder_value`, constrained into bounds; the initial visible
    /// range is positioned around it per [`CalendarConfig::alignment`].
    pub fn with_availability(config: CalendarConfig, availability: A) -> Result<Self, CalendarError> {
        validate(config.visible_duration, config.min_value, config.max_value)?;
        let focused_date = constrain_value(
            config
                .focused_value
                .or(config.value)
                .unwrap_or(config.placeholder_value),
            config.min_value,
            config.max_value,
        );
        let align = match config.alignment {
            Alignment::Start => align_start,
            Alignment::Center => align_center,
            Alignment::End => align_end,
        };
        let start_date = align(
            focused_date,
            config.visible_duration,
            config.first_day_of_week,
            config.min_value,
            config.max_value,
        );
        Ok(Self {
            availability,
            value: config.value,
            focused_date,
            start_date,
            min_value: config.min_value,
            max_value: config.max_value,
            visible_duration: config.visible_duration,
            first_day_of_week: config.first_day_of_week,
            disabled: config.disabled,
            read_only: config.read_only,
            focused: false,
            focus_intent: None,
            epoch: 0,
        })
    }

    /// The selected date, if any.
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Replace the selected value directly, bypassing availability walks.
    /// This is the hook for hosts that own the value (controlled usage).
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        if self.value != value {
            self.note_change();
        }
        self.value = value;
    }

    /// The date that keyboard navigation is on.
    pub fn focused_date(&self) -> NaiveDate {
        self.focused_date
    }

    /// The currently visible page, both ends inclusive.
    pub fn visible_range(&self) -> DateRange {
        let end = subtract(
            add(self.start_date, self.visible_duration),
            DateDuration::of_days(1),
        );
        DateRange::new(self.start_date, end)
    }

    /// Earliest selectable date, if bounded.
    pub fn min_value(&self) -> Option<NaiveDate> {
        self.min_value
    }

    /// Latest selectable date, if bounded.
    pub fn max_value(&self) -> Option<NaiveDate> {
        self.max_value
    }

    /// Span of one visible page.
    pub fn visible_duration(&self) -> DateDuration {
        self.visible_duration
    }

    /// Weekday starting each rendered week row.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// True if all interaction is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// True if selection is refused while focus still moves.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True if the calendar grid has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Record whether the grid has keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.note_change();
        }
    }

    /// Counter of observable state changes, for host-side recomputation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Drain the pending "move platform focus to this cell" request.
    ///
    /// Focus-moving operations record the date whose cell should receive real
    /// focus; the host drains it after re-rendering. Returns `None` when no
    /// focus movement happened since the last drain.
    pub fn take_focus_intent(&mut self) -> Option<NaiveDate> {
        self.focus_intent.take()
    }

    pub(crate) fn note_change(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Move focus to `date`, constrained into bounds, scrolling the visible
    /// range the minimal amount when the date is outside it.
    pub fn set_focused_date(&mut self, date: NaiveDate) {
        let date = constrain_value(date, self.min_value, self.max_value);
        self.focus_cell(date);
        let range = self.visible_range();
        if self.focused_date < range.start {
            self.start_date = align_end(
                self.focused_date,
                self.visible_duration,
                self.first_day_of_week,
                self.min_value,
                self.max_value,
            );
            self.note_change();
        } else if self.focused_date > range.end {
            self.start_date = align_start(
                self.focused_date,
                self.visible_duration,
                self.first_day_of_week,
                self.min_value,
                self.max_value,
            );
            self.note_change();
        }
    }

    /// Move focus one day forward.
    pub fn focus_next_day(&mut self) {
        self.focus_relative(DateDuration::of_days(1));
    }

    /// Move focus one day backward.
    pub fn focus_previous_day(&mut self) {
        self.focus_relative(DateDuration::of_days(-1));
    }

    /// Move focus one week forward (the row below).
    pub fn focus_next_row(&mut self) {
        self.focus_relative(DateDuration::of_weeks(1));
    }

    /// Move focus one week backward (the row above).
    pub fn focus_previous_row(&mut self) {
        self.focus_relative(DateDuration::of_weeks(-1));
    }

    /// Advance one full page.
    ///
    /// The page start is realigned around the newly focused date so that a
    /// clamp at the bounds still yields a fully in-bounds page.
    pub fn focus_next_page(&mut self) {
        if self.disabled {
            return;
        }
        let start = add(self.start_date, self.visible_duration);
        let focused = constrain_value(
            add(self.focused_date, self.visible_duration),
            self.min_value,
            self.max_value,
        );
        self.set_page(focused, start);
    }

    /// Go back one full page. See [`focus_next_page`](Self::focus_next_page).
    pub fn focus_previous_page(&mut self) {
        if self.disabled {
            return;
        }
        let start = subtract(self.start_date, self.visible_duration);
        let focused = constrain_value(
            subtract(self.focused_date, self.visible_duration),
            self.min_value,
            self.max_value,
        );
        self.set_page(focused, start);
    }

    /// Move focus to the first day of the focused month.
    pub fn focus_section_start(&mut self) {
        if !self.disabled {
            self.set_focused_date(start_of_month(self.focused_date));
        }
    }

    /// Move focus to the last day of the focused month.
    pub fn focus_section_end(&mut self) {
        if !self.disabled {
            self.set_focused_date(end_of_month(self.focused_date));
        }
    }

    /// Move focus forward by one section: a year when `larger`, otherwise one
    /// unit of the visible duration's largest unit.
    pub fn focus_next_section(&mut self, larger: bool) {
        self.focus_relative(self.section_step(larger));
    }

    /// Move focus backward by one section.
    pub fn focus_previous_section(&mut self, larger: bool) {
        self.focus_relative(-self.section_step(larger));
    }

    /// Select `date` if interaction allows it.
    ///
    /// The date is constrained into bounds; if it is unavailable, selection
    /// walks backward to the nearest available date at or after the visible
    /// range start, and gives up (leaving the value untouched) when none
    /// exists.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.disabled || self.read_only {
            return;
        }
        let date = constrain_value(date, self.min_value, self.max_value);
        let availability = &self.availability;
        let Some(date) = previous_available_date(date, self.start_date, |d| {
            availability.is_unavailable(d)
        }) else {
            return;
        };
        if self.value != Some(date) {
            self.note_change();
        }
        self.value = Some(date);
    }

    /// Select the focused date.
    pub fn select_focused_date(&mut self) {
        self.select_date(self.focused_date);
    }

    /// True if `date` falls outside the min/max bounds.
    pub fn is_invalid(&self, date: NaiveDate) -> bool {
        trellis_date::is_invalid(date, self.min_value, self.max_value)
    }

    /// True if `date` is the selected value.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.value == Some(date)
    }

    /// True if `date`'s cell shows keyboard focus: the grid is focused and
    /// `date` is the focused date.
    pub fn is_cell_focused(&self, date: NaiveDate) -> bool {
        self.focused && self.focused_date == date
    }

    /// True if `date`'s cell cannot be interacted with: the calendar is
    /// disabled, the date is outside the visible range, or it is out of
    /// bounds.
    pub fn is_cell_disabled(&self, date: NaiveDate) -> bool {
        self.disabled || !self.visible_range().contains(date) || self.is_invalid(date)
    }

    /// True if the host marked `date` unavailable.
    pub fn is_cell_unavailable(&self, date: NaiveDate) -> bool {
        self.availability.is_unavailable(date)
    }

    fn section_step(&self, larger: bool) -> DateDuration {
        if larger {
            DateDuration::of_years(1)
        } else {
            self.visible_duration.unit_duration()
        }
    }

    fn focus_relative(&mut self, step: DateDuration) {
        if !self.disabled {
            self.set_focused_date(add(self.focused_date, step));
        }
    }

    // Page navigation realigns around the new focused date rather than the
    // stepped start, so landing on a min/max clamp cannot leave the focus
    // outside the page.
    fn set_page(&mut self, focused: NaiveDate, start: NaiveDate) {
        let start = constrain_start(
            focused,
            start,
            self.visible_duration,
            self.first_day_of_week,
            self.min_value,
            self.max_value,
        );
        let start = align_start(
            start,
            self.visible_duration,
            self.first_day_of_week,
            None,
            None,
        );
        if start != self.start_date {
            self.start_date = start;
            self.note_change();
        }
        self.focus_cell(focused);
    }

    fn focus_cell(&mut self, date: NaiveDate) {
        if date != self.focused_date {
            self.focused_date = date;
            self.note_change();
        }
        self.focus_intent = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month_calendar(focused: NaiveDate) -> CalendarState {
        CalendarState::new(CalendarConfig {
            focused_value: Some(focused),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn construction_errors() {
        let err = CalendarState::new(CalendarConfig {
            visible_duration: DateDuration::ZERO,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, CalendarError::EmptyVisibleDuration);

        let err = CalendarState::new(CalendarConfig {
            min_value: Some(ymd(2024, 6, 1)),
            max_value: Some(ymd(2024, 1, 1)),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            CalendarError::MinAfterMax {
                min: ymd(2024, 6, 1),
                max: ymd(2024, 1, 1),
            }
        );
    }

    #[test]
    fn negative_visible_duration_is_rejected() {
        // A backward page would invert the visible range; constructors must
        // refuse it instead of leaving it to blow up later.
        let err = CalendarState::new(CalendarConfig {
            visible_duration: DateDuration::of_months(-1),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            CalendarError::NegativeVisibleDuration {
                duration: DateDuration::of_months(-1),
            }
        );

        // Mixed signs are rejected even when the net span is forward.
        let err = CalendarState::new(CalendarConfig {
            visible_duration: DateDuration {
                years: 0,
                months: 1,
                weeks: 0,
                days: -3,
            },
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, CalendarError::NegativeVisibleDuration { .. }));
    }

    #[test]
    fn initial_focus_falls_back_through_value_and_placeholder() {
        let state = CalendarState::new(CalendarConfig {
            value: Some(ymd(2024, 3, 10)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(state.focused_date(), ymd(2024, 3, 10));

        let state = CalendarState::new(CalendarConfig {
            placeholder_value: ymd(2030, 7, 4),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(state.focused_date(), ymd(2030, 7, 4));
        assert_eq!(state.value(), None);
    }

    #[test]
    fn month_page_covers_the_focused_month() {
        let state = month_calendar(ymd(2024, 2, 15));
        let range = state.visible_range();
        assert_eq!(range.start, ymd(2024, 2, 1));
        assert_eq!(range.end, ymd(2024, 2, 29));
    }

    #[test]
    fn day_steps_and_rows() {
        let mut state = month_calendar(ymd(2024, 2, 15));
        state.focus_next_day();
        assert_eq!(state.focused_date(), ymd(2024, 2, 16));
        state.focus_previous_row();
        assert_eq!(state.focused_date(), ymd(2024, 2, 9));
        state.focus_next_row();
        state.focus_previous_day();
        assert_eq!(state.focused_date(), ymd(2024, 2, 15));
    }

    #[test]
    fn crossing_the_page_edge_scrolls_minimally() {
        let mut state = month_calendar(ymd(2024, 2, 29));
        state.focus_next_day();
        assert_eq!(state.focused_date(), ymd(2024, 3, 1));
        assert_eq!(state.visible_range().start, ymd(2024, 3, 1));
        state.focus_previous_day();
        assert_eq!(state.focused_date(), ymd(2024, 2, 29));
        // Scrolling backward aligns the page end to the focused date.
        assert_eq!(state.visible_range().start, ymd(2024, 2, 1));
    }

    #[test]
    fn page_navigation_steps_whole_months() {
        let mut state = month_calendar(ymd(2024, 2, 15));
        state.focus_next_page();
        assert_eq!(state.focused_date(), ymd(2024, 3, 15));
        assert_eq!(state.visible_range().start, ymd(2024, 3, 1));
        state.focus_previous_page();
        assert_eq!(state.focused_date(), ymd(2024, 2, 15));
        assert_eq!(state.visible_range().start, ymd(2024, 2, 1));
    }

    #[test]
    fn page_navigation_realigns_at_the_minimum() {
        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 2, 15)),
            min_value: Some(ymd(2024, 1, 1)),
            ..Default::default()
        })
        .unwrap();
        state.focus_previous_page();
        assert_eq!(state.focused_date(), ymd(2024, 1, 15));
        assert_eq!(state.visible_range().start, ymd(2024, 1, 1));
        // A second page back clamps focus to the minimum but keeps the page
        // aligned to it.
        state.focus_previous_page();
        assert_eq!(state.focused_date(), ymd(2024, 1, 1));
        assert_eq!(state.visible_range().start, ymd(2024, 1, 1));
    }

    #[test]
    fn page_navigation_realigns_at_the_maximum() {
        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 1, 15)),
            max_value: Some(ymd(2024, 1, 20)),
            ..Default::default()
        })
        .unwrap();
        state.focus_next_page();
        assert_eq!(state.focused_date(), ymd(2024, 1, 20));
        // The page cannot move past the maximum.
        assert_eq!(state.visible_range().start, ymd(2024, 1, 1));
    }

    #[test]
    fn multi_month_page_keeps_month_alignment() {
        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 2, 10)),
            visible_duration: DateDuration::of_months(3),
            alignment: Alignment::Start,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(state.visible_range().start, ymd(2024, 2, 1));
        assert_eq!(state.visible_range().end, ymd(2024, 4, 30));
        state.focus_next_page();
        assert_eq!(state.visible_range().start, ymd(2024, 5, 1));
        assert_eq!(state.focused_date(), ymd(2024, 5, 10));
    }

    #[test]
    fn week_duration_aligns_to_first_day_of_week() {
        let state = CalendarState::new(CalendarConfig {
            // 2024-02-15 is a Thursday.
            focused_value: Some(ymd(2024, 2, 15)),
            visible_duration: DateDuration::of_weeks(1),
            alignment: Alignment::Start,
            first_day_of_week: Weekday::Mon,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(state.visible_range().start, ymd(2024, 2, 12));
        assert_eq!(state.visible_range().end, ymd(2024, 2, 18));
    }

    #[test]
    fn section_navigation() {
        let mut state = month_calendar(ymd(2024, 2, 15));
        state.focus_section_start();
        assert_eq!(state.focused_date(), ymd(2024, 2, 1));
        state.focus_section_end();
        assert_eq!(state.focused_date(), ymd(2024, 2, 29));

        let mut state = month_calendar(ymd(2024, 2, 15));
        state.focus_next_section(false);
        assert_eq!(state.focused_date(), ymd(2024, 3, 15));
        state.focus_previous_section(true);
        assert_eq!(state.focused_date(), ymd(2023, 3, 15));
    }

    #[test]
    fn selection_and_read_only() {
        let mut state = month_calendar(ymd(2024, 2, 15));
        state.select_focused_date();
        assert_eq!(state.value(), Some(ymd(2024, 2, 15)));
        assert!(state.is_selected(ymd(2024, 2, 15)));

        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 2, 15)),
            read_only: true,
            ..Default::default()
        })
        .unwrap();
        state.select_focused_date();
        assert_eq!(state.value(), None);
        // Focus still moves in a read-only calendar.
        state.focus_next_day();
        assert_eq!(state.focused_date(), ymd(2024, 2, 16));
    }

    #[test]
    fn disabled_blocks_focus_and_selection() {
        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 2, 15)),
            disabled: true,
            ..Default::default()
        })
        .unwrap();
        state.focus_next_day();
        state.focus_next_page();
        state.select_focused_date();
        assert_eq!(state.focused_date(), ymd(2024, 2, 15));
        assert_eq!(state.value(), None);
    }

    #[test]
    fn selecting_an_unavailable_date_walks_backward() {
        let unavailable = |date: NaiveDate| date == ymd(2024, 2, 15) || date == ymd(2024, 2, 14);
        let mut state = CalendarState::with_availability(
            CalendarConfig {
                focused_value: Some(ymd(2024, 2, 15)),
                ..Default::default()
            },
            unavailable,
        )
        .unwrap();
        state.select_focused_date();
        assert_eq!(state.value(), Some(ymd(2024, 2, 13)));
    }

    #[test]
    fn selection_gives_up_before_the_visible_range_start() {
        // Everything from the page start through the 15th is unavailable, so
        // the backward walk exits the page and the selection is abandoned.
        let unavailable = |date: NaiveDate| date <= ymd(2024, 2, 15);
        let mut state = CalendarState::with_availability(
            CalendarConfig {
                focused_value: Some(ymd(2024, 2, 10)),
                ..Default::default()
            },
            unavailable,
        )
        .unwrap();
        state.select_focused_date();
        assert_eq!(state.value(), None);
        state.select_date(ymd(2024, 2, 20));
        assert_eq!(state.value(), Some(ymd(2024, 2, 20)));
    }

    #[test]
    fn focus_clamps_to_bounds() {
        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 2, 15)),
            min_value: Some(ymd(2024, 2, 10)),
            max_value: Some(ymd(2024, 2, 20)),
            ..Default::default()
        })
        .unwrap();
        state.set_focused_date(ymd(2024, 5, 1));
        assert_eq!(state.focused_date(), ymd(2024, 2, 20));
        state.set_focused_date(ymd(2023, 1, 1));
        assert_eq!(state.focused_date(), ymd(2024, 2, 10));
    }

    #[test]
    fn cell_predicates() {
        let mut state = CalendarState::new(CalendarConfig {
            focused_value: Some(ymd(2024, 2, 15)),
            min_value: Some(ymd(2024, 2, 5)),
            ..Default::default()
        })
        .unwrap();
        assert!(!state.is_cell_focused(ymd(2024, 2, 15)), "grid not focused yet");
        state.set_focused(true);
        assert!(state.is_cell_focused(ymd(2024, 2, 15)));
        assert!(!state.is_cell_focused(ymd(2024, 2, 16)));

        assert!(state.is_invalid(ymd(2024, 2, 4)));
        assert!(state.is_cell_disabled(ymd(2024, 2, 4)), "out of bounds");
        assert!(state.is_cell_disabled(ymd(2024, 3, 1)), "outside the page");
        assert!(!state.is_cell_disabled(ymd(2024, 2, 15)));
    }

    #[test]
    fn epoch_and_focus_intent() {
        let mut state = month_calendar(ymd(2024, 2, 15));
        assert_eq!(state.take_focus_intent(), None);
        let epoch = state.epoch();
        state.focus_next_day();
        assert_ne!(state.epoch(), epoch);
        assert_eq!(state.take_focus_intent(), Some(ymd(2024, 2, 16)));
        assert_eq!(state.take_focus_intent(), None, "intent drains once");

        // Clamped-to-same-date focus still records intent but no change.
        let epoch = state.epoch();
        state.set_focused_date(ymd(2024, 2, 16));
        assert_eq!(state.epoch(), epoch);
        assert_eq!(state.take_focus_intent(), Some(ymd(2024, 2, 16)));
    }
}
