// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration, availability seam, and pointer-protocol types.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use trellis_date::{DateDuration, DateRange};

/// Milliseconds a touch press must be held before a drag-selection may
/// begin. Hosts own the timer; on expiry they call
/// [`RangeCalendarState::begin_pointer_selection`](crate::RangeCalendarState::begin_pointer_selection).
pub const TOUCH_DRAG_DELAY_MS: u64 = 200;

/// Errors reported by the state constructors.
///
/// Configuration is validated once, up front; every later operation is
/// infallible and clamps instead of failing.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum CalendarError {
    /// The visible duration has no populated unit.
    #[error("visible duration is empty")]
    EmptyVisibleDuration,
    /// The visible duration has a negative unit. Negative durations are
    /// meaningful for arithmetic but a visible page must span forward.
    #[error("visible duration {duration:?} has a negative unit")]
    NegativeVisibleDuration {
        /// The rejected duration.
        duration: DateDuration,
    },
    /// The minimum bound is after the maximum bound.
    #[error("minimum date {min} is after maximum date {max}")]
    MinAfterMax {
        /// Configured minimum.
        min: NaiveDate,
        /// Configured maximum.
        max: NaiveDate,
    },
}

/// How the initial visible range is positioned around the focused date.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Alignment {
    /// Focused date starts the visible range.
    Start,
    /// Focused date sits mid-range.
    #[default]
    Center,
    /// Focused date ends the visible range.
    End,
}

/// Host-supplied predicate marking individual dates unselectable.
///
/// Unavailability is orthogonal to the min/max bounds: an unavailable date is
/// still visible and focusable, but selection walks backward past it (see
/// [`previous_available_date`](trellis_date::previous_available_date)) and a
/// range may not span it unless the range calendar allows non-contiguous
/// ranges.
pub trait DateAvailability {
    /// True if `date` may not be selected.
    fn is_unavailable(&self, date: NaiveDate) -> bool;
}

/// Availability that marks every date selectable. The default seam.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysAvailable;

impl DateAvailability for AlwaysAvailable {
    fn is_unavailable(&self, _date: NaiveDate) -> bool {
        false
    }
}

impl<F: Fn(NaiveDate) -> bool> DateAvailability for F {
    fn is_unavailable(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Pointer device class, as reported by the host's input layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerKind {
    /// A mouse or trackpad cursor.
    Mouse,
    /// A direct touch contact.
    Touch,
    /// A stylus.
    Pen,
}

/// When a press may start a drag selection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragActivation {
    /// Start dragging on press.
    Immediate,
    /// Start only after the press is held [`TOUCH_DRAG_DELAY_MS`]
    /// milliseconds, so scroll gestures keep working.
    Deferred,
}

impl DragActivation {
    /// Activation policy for a pointer class.
    pub fn for_pointer(kind: PointerKind) -> Self {
        match kind {
            PointerKind::Mouse | PointerKind::Pen => Self::Immediate,
            PointerKind::Touch => Self::Deferred,
        }
    }
}

/// Construction options for [`CalendarState`](crate::CalendarState).
#[derive(Clone, Debug)]
pub struct CalendarConfig {
    /// Initially selected date.
    pub value: Option<NaiveDate>,
    /// Initially focused date; falls back to `value`, then
    /// `placeholder_value`.
    pub focused_value: Option<NaiveDate>,
    /// Date shown when there is neither a value nor an explicit focus.
    pub placeholder_value: NaiveDate,
    /// Earliest selectable date, inclusive.
    pub min_value: Option<NaiveDate>,
    /// Latest selectable date, inclusive.
    pub max_value: Option<NaiveDate>,
    /// Span of one visible page. Must be non-empty.
    pub visible_duration: DateDuration,
    /// Initial position of the focused date within the page.
    pub alignment: Alignment,
    /// Weekday that starts each rendered week row.
    pub first_day_of_week: Weekday,
    /// Disable all interaction.
    pub disabled: bool,
    /// Allow focus movement but refuse selection.
    pub read_only: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            value: None,
            focused_value: None,
            placeholder_value: NaiveDate::default(),
            min_value: None,
            max_value: None,
            visible_duration: DateDuration::of_months(1),
            alignment: Alignment::default(),
            first_day_of_week: Weekday::Sun,
            disabled: false,
            read_only: false,
        }
    }
}

/// Construction options for
/// [`RangeCalendarState`](crate::RangeCalendarState).
///
/// There is no alignment field: the range calendar centers on the range
/// start, falling back to start alignment when the committed range spills
/// past one page.
#[derive(Clone, Debug)]
pub struct RangeCalendarConfig {
    /// Initially committed range.
    pub value: Option<DateRange>,
    /// Initially focused date; falls back to the range start, then
    /// `placeholder_value`.
    pub focused_value: Option<NaiveDate>,
    /// Date shown when there is neither a value nor an explicit focus.
    pub placeholder_value: NaiveDate,
    /// Earliest selectable date, inclusive.
    pub min_value: Option<NaiveDate>,
    /// Latest selectable date, inclusive.
    pub max_value: Option<NaiveDate>,
    /// Span of one visible page. Must be non-empty.
    pub visible_duration: DateDuration,
    /// Weekday that starts each rendered week row.
    pub first_day_of_week: Weekday,
    /// Disable all interaction.
    pub disabled: bool,
    /// Allow focus movement but refuse selection.
    pub read_only: bool,
    /// Permit an in-progress range to span unavailable dates.
    pub allows_non_contiguous_ranges: bool,
}

impl Default for RangeCalendarConfig {
    fn default() -> Self {
        Self {
            value: None,
            focused_value: None,
            placeholder_value: NaiveDate::default(),
            min_value: None,
            max_value: None,
            visible_duration: DateDuration::of_months(1),
            first_day_of_week: Weekday::Sun,
            disabled: false,
            read_only: false,
            allows_non_contiguous_ranges: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_activation_by_pointer() {
        assert_eq!(
            DragActivation::for_pointer(PointerKind::Mouse),
            DragActivation::Immediate
        );
        assert_eq!(
            DragActivation::for_pointer(PointerKind::Pen),
            DragActivation::Immediate
        );
        assert_eq!(
            DragActivation::for_pointer(PointerKind::Touch),
            DragActivation::Deferred
        );
    }

    #[test]
    fn closure_availability() {
        let weekends =
            |date: NaiveDate| matches!(chrono::Datelike::weekday(&date), Weekday::Sat | Weekday::Sun);
        // 2024-01-06 is a Saturday.
        let sat = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(weekends.is_unavailable(sat));
        assert!(!weekends.is_unavailable(mon));
        assert!(!AlwaysAvailable.is_unavailable(sat));
    }

    #[test]
    fn config_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.placeholder_value, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(config.visible_duration, DateDuration::of_months(1));
        assert_eq!(config.first_day_of_week, Weekday::Sun);
        assert_eq!(config.alignment, Alignment::Center);
    }
}
