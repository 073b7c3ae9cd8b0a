// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duration arithmetic and unit boundaries.
//!
//! Months (and years, as twelve months) apply before weeks and days, clamping
//! the day-of-month: `Jan 31 + 1 month` is the last day of February. Results
//! that would leave chrono's representable range saturate at
//! [`NaiveDate::MIN`]/[`NaiveDate::MAX`] instead of panicking; the calendar
//! state machines clamp to their own bounds long before that matters.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::types::DateDuration;

/// Add a mixed-unit duration to a date.
pub fn add(date: NaiveDate, duration: DateDuration) -> NaiveDate {
    let months = i64::from(duration.years) * 12 + i64::from(duration.months);
    let days = i64::from(duration.weeks) * 7 + i64::from(duration.days);
    add_days(add_months(date, months), days)
}

/// Subtract a mixed-unit duration from a date.
pub fn subtract(date: NaiveDate, duration: DateDuration) -> NaiveDate {
    add(date, -duration)
}

/// The first day of the week containing `date`, for a given week start.
pub fn start_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - first_day_of_week.num_days_from_monday())
        % 7;
    add_days(date, -i64::from(offset))
}

/// The last day of the week containing `date`, for a given week start.
pub fn end_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    add_days(start_of_week(date, first_day_of_week), 6)
}

/// The first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// The last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    add_days(add_months(start_of_month(date), 1), -1)
}

/// January 1 of the year containing `date`.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("January 1 exists in every year")
}

/// December 31 of the year containing `date`.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).expect("December 31 exists in every year")
}

fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    if months >= 0 {
        let step = Months::new(u32::try_from(months).unwrap_or(u32::MAX));
        date.checked_add_months(step).unwrap_or(NaiveDate::MAX)
    } else {
        let step = Months::new(u32::try_from(-months).unwrap_or(u32::MAX));
        date.checked_sub_months(step).unwrap_or(NaiveDate::MIN)
    }
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        let step = Days::new(days.unsigned_abs());
        date.checked_add_days(step).unwrap_or(NaiveDate::MAX)
    } else {
        let step = Days::new(days.unsigned_abs());
        date.checked_sub_days(step).unwrap_or(NaiveDate::MIN)
    }
}
