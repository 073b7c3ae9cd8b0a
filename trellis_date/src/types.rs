// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types: mixed-unit durations and inclusive date ranges.

use chrono::NaiveDate;

/// The largest populated unit of a [`DateDuration`].
///
/// Alignment ([`align_start`](crate::align_start) and friends) snaps a
/// visible-range start to this unit: year > month > week > day.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum DateUnit {
    /// Calendar day.
    Day,
    /// Seven days, aligned to a configurable first day of the week.
    Week,
    /// Calendar month; day-of-month clamps when stepping.
    Month,
    /// Calendar year.
    Year,
}

/// A mixed-unit calendar duration.
///
/// All fields may be negative. Arithmetic applies years and months first
/// (clamping the day-of-month), then weeks and days; see [`crate::add`].
///
/// The zero duration is *empty*: it names no unit and cannot drive a visible
/// range.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DateDuration {
    /// Number of years.
    pub years: i32,
    /// Number of months.
    pub months: i32,
    /// Number of weeks.
    pub weeks: i32,
    /// Number of days.
    pub days: i32,
}

impl DateDuration {
    /// The empty duration.
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
    };

    /// A duration of `days` days.
    pub const fn of_days(days: i32) -> Self {
        Self {
            days,
            ..Self::ZERO
        }
    }

    /// A duration of `weeks` weeks.
    pub const fn of_weeks(weeks: i32) -> Self {
        Self {
            weeks,
            ..Self::ZERO
        }
    }

    /// A duration of `months` months.
    pub const fn of_months(months: i32) -> Self {
        Self {
            months,
            ..Self::ZERO
        }
    }

    /// A duration of `years` years.
    pub const fn of_years(years: i32) -> Self {
        Self {
            years,
            ..Self::ZERO
        }
    }

    /// True if every unit is zero.
    pub const fn is_empty(self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0
    }

    /// The largest populated unit, or `None` for the empty duration.
    pub const fn largest_unit(self) -> Option<DateUnit> {
        if self.years != 0 {
            Some(DateUnit::Year)
        } else if self.months != 0 {
            Some(DateUnit::Month)
        } else if self.weeks != 0 {
            Some(DateUnit::Week)
        } else if self.days != 0 {
            Some(DateUnit::Day)
        } else {
            None
        }
    }

    /// A duration with every populated unit replaced by `1`.
    ///
    /// Used to step by "one unit" of a visible range regardless of how many
    /// of each unit it spans: three visible months step by one month.
    pub const fn unit_duration(self) -> Self {
        Self {
            years: (self.years != 0) as i32,
            months: (self.months != 0) as i32,
            weeks: (self.weeks != 0) as i32,
            days: (self.days != 0) as i32,
        }
    }
}

impl core::ops::Neg for DateDuration {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            weeks: -self.weeks,
            days: -self.days,
        }
    }
}

/// An inclusive range of dates with `start <= end`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DateRange {
    /// First date in the range.
    pub start: NaiveDate,
    /// Last date in the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from already-ordered endpoints.
    ///
    /// Debug builds assert the ordering; use [`DateRange::between`] when the
    /// endpoints may arrive reversed (for example an anchor paired with a
    /// focused date).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateRange endpoints must be ordered");
        Self { start, end }
    }

    /// Create a range spanning `a` and `b` in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// True if `date` falls within the range, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
