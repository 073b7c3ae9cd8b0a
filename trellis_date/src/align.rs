// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-range alignment and bounds clamping.
//!
//! A calendar displays a contiguous span of `duration` (for example three
//! months) and needs a start date for it. The `align_*` functions compute
//! that start so the span contains `date`, snapped to the duration's largest
//! unit, then pull it back inside `[min, max]` via [`constrain_start`] so the
//! page never extends past a bound when `date` itself is in bounds.
//!
//! The tie-break in [`constrain_start`] is asymmetric on purpose: the
//! min-constraint wins by taking the later of the two candidate starts, the
//! max-constraint by taking the earlier.

use chrono::{Days, NaiveDate, Weekday};

use crate::arith::{start_of_month, start_of_week, start_of_year, subtract};
use crate::types::{DateDuration, DateUnit};

/// True if `date` lies before `min` or after `max`.
pub fn is_invalid(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max)
}

/// Clamp `date` into `[min, max]`.
pub fn constrain_value(
    date: NaiveDate,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> NaiveDate {
    let date = match min {
        Some(min) => date.max(min),
        None => date,
    };
    match max {
        Some(max) => date.min(max),
        None => date,
    }
}

/// Start of a `duration`-long visible range containing `date`, aligned so
/// `date` falls in the range's first unit.
pub fn align_start(
    date: NaiveDate,
    duration: DateDuration,
    first_day_of_week: Weekday,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> NaiveDate {
    let aligned = align_start_unconstrained(date, duration, first_day_of_week);
    constrain_start(date, aligned, duration, first_day_of_week, min, max)
}

/// Start of a `duration`-long visible range containing `date`, aligned so
/// `date` falls in the range's last unit.
pub fn align_end(
    date: NaiveDate,
    duration: DateDuration,
    first_day_of_week: Weekday,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> NaiveDate {
    let aligned = align_end_unconstrained(date, duration, first_day_of_week);
    constrain_start(date, aligned, duration, first_day_of_week, min, max)
}

/// Start of a `duration`-long visible range with `date` in its middle unit.
///
/// The half-duration offset floors, with a further `-1` on even unit counts
/// so a two-month page keeps `date` in its first month rather than padding a
/// leading month.
pub fn align_center(
    date: NaiveDate,
    duration: DateDuration,
    first_day_of_week: Weekday,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> NaiveDate {
    let half = half_duration(duration);
    let aligned = subtract(
        align_start_unconstrained(date, duration, first_day_of_week),
        half,
    );
    constrain_start(date, aligned, duration, first_day_of_week, min, max)
}

/// Pull an `aligned` start back inside the bounds.
///
/// When `date >= min`, the start may not precede the aligned start of `min`'s
/// page; when `date <= max`, it may not exceed the aligned end-start of
/// `max`'s page. Dates already out of bounds are left to the caller's
/// clamping and do not constrain the page here.
pub fn constrain_start(
    date: NaiveDate,
    aligned: NaiveDate,
    duration: DateDuration,
    first_day_of_week: Weekday,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> NaiveDate {
    let mut aligned = aligned;
    if let Some(min) = min
        && date >= min
    {
        aligned = aligned.max(align_start_unconstrained(min, duration, first_day_of_week));
    }
    if let Some(max) = max
        && date <= max
    {
        aligned = aligned.min(align_end_unconstrained(max, duration, first_day_of_week));
    }
    aligned
}

/// Walk backward from `date` one day at a time while it is unavailable.
///
/// Returns the first available date at or before `date`, or `None` once the
/// walk passes `min` without finding one. The walk is backward-only; callers
/// that want a forward fallback must search separately.
pub fn previous_available_date<F>(
    date: NaiveDate,
    min: NaiveDate,
    is_unavailable: F,
) -> Option<NaiveDate>
where
    F: Fn(NaiveDate) -> bool,
{
    let mut date = date;
    while date >= min && is_unavailable(date) {
        date = date.checked_sub_days(Days::new(1))?;
    }
    (date >= min).then_some(date)
}

fn align_start_unconstrained(
    date: NaiveDate,
    duration: DateDuration,
    first_day_of_week: Weekday,
) -> NaiveDate {
    match duration.largest_unit() {
        Some(DateUnit::Year) => start_of_year(date),
        Some(DateUnit::Month) => start_of_month(date),
        Some(DateUnit::Week) => start_of_week(date, first_day_of_week),
        Some(DateUnit::Day) | None => date,
    }
}

fn align_end_unconstrained(
    date: NaiveDate,
    duration: DateDuration,
    first_day_of_week: Weekday,
) -> NaiveDate {
    // Shift back by the duration minus one of its smallest unit, so `date`'s
    // unit becomes the last one on the page.
    let mut shift = duration;
    if shift.days != 0 {
        shift.days -= 1;
    } else if shift.weeks != 0 {
        shift.weeks -= 1;
    } else if shift.months != 0 {
        shift.months -= 1;
    } else if shift.years != 0 {
        shift.years -= 1;
    }
    subtract(
        align_start_unconstrained(date, duration, first_day_of_week),
        shift,
    )
}

fn half_duration(duration: DateDuration) -> DateDuration {
    DateDuration {
        years: half_unit(duration.years),
        months: half_unit(duration.months),
        weeks: half_unit(duration.weeks),
        days: half_unit(duration.days),
    }
}

fn half_unit(value: i32) -> i32 {
    if value == 0 {
        return 0;
    }
    let mut half = value / 2;
    if value % 2 == 0 {
        half -= 1;
    }
    half
}
