// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Date: calendar date arithmetic for headless widgets.
//!
//! This crate is the leaf layer under the Trellis calendar state machines.
//! It provides pure functions over [`chrono::NaiveDate`]:
//!
//! - Mixed-unit [`DateDuration`] arithmetic ([`add`]/[`subtract`]) with
//!   day-of-month clamping when stepping across month boundaries.
//! - Visible-range alignment ([`align_start`], [`align_center`],
//!   [`align_end`], [`constrain_start`]) used to keep a calendar page of a
//!   given duration positioned around a focused date without extending past
//!   the configured minimum/maximum.
//! - Clamping and validity checks ([`constrain_value`], [`is_invalid`]).
//! - A backward walk over unavailable dates ([`previous_available_date`]).
//! - Formatting hints: the era display rule ([`era_format`]) and range-part
//!   splitting ([`split_range_parts`]) for localized range announcements.
//!
//! Out-of-range results clamp rather than error; the only fallible surface is
//! [`previous_available_date`], which reports "no available date" as `None`.
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use trellis_date::{DateDuration, add, align_center, constrain_value};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
//!
//! // A one-month page centered on the date starts at the first of its month.
//! let start = align_center(date, DateDuration::of_months(1), Weekday::Sun, None, None);
//! assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
//!
//! // Month stepping clamps the day-of-month.
//! let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! assert_eq!(
//!     add(jan31, DateDuration::of_months(1)),
//!     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
//! );
//!
//! // Clamping into bounds.
//! let min = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert_eq!(constrain_value(jan31, Some(min), None), jan31);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod align;
pub mod arith;
pub mod format;
pub mod types;

pub use align::{
    align_center, align_end, align_start, constrain_start, constrain_value, is_invalid,
    previous_available_date,
};
pub use arith::{
    add, end_of_month, end_of_week, end_of_year, start_of_month, start_of_week, start_of_year,
    subtract,
};
pub use format::{EraFormat, RangeFormatPart, RangeSource, era_format, split_range_parts};
pub use types::{DateDuration, DateRange, DateUnit};
