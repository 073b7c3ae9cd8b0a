// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Calendar: headless calendar and range-calendar state.
//!
//! The state machines here own everything a calendar widget decides but
//! nothing it draws: the focused date, the visible page, selection, bounds
//! clamping, and the pointer-drag protocol for ranges. Rendering, focus
//! management, and timers stay with the host:
//!
//! - State pushes no events. Mutations bump an [`epoch`](CalendarState::epoch)
//!   counter when something observable changed; hosts re-read the accessors.
//! - Operations that should move real (platform/DOM) focus record a *focus
//!   intent* the host drains with
//!   [`take_focus_intent`](CalendarState::take_focus_intent) after
//!   re-rendering.
//! - Touch drag activation is deferred by [`TOUCH_DRAG_DELAY_MS`]; the host
//!   owns the hold timer and calls into the drag protocol when it fires.
//!
//! [`CalendarState`] manages a single selected date. [`RangeCalendarState`]
//! wraps it with an anchored two-step range selection where the committed
//! range may not span an unavailable date unless configured otherwise.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trellis_calendar::{CalendarConfig, CalendarState};
//!
//! let mut state = CalendarState::new(CalendarConfig {
//!     focused_value: NaiveDate::from_ymd_opt(2024, 2, 15),
//!     ..Default::default()
//! })?;
//!
//! state.focus_next_row();
//! state.select_focused_date();
//! assert_eq!(state.value(), NaiveDate::from_ymd_opt(2024, 2, 22));
//! # Ok::<(), trellis_calendar::CalendarError>(())
//! ```
//!
//! This crate is `no_std`; it performs no allocation.

#![no_std]

pub mod calendar;
pub mod range;
pub mod types;

pub use calendar::CalendarState;
pub use range::{AvailableRange, RangeCalendarState};
pub use types::{
    Alignment, AlwaysAvailable, CalendarConfig, CalendarError, DateAvailability, DragActivation,
    PointerKind, RangeCalendarConfig, TOUCH_DRAG_DELAY_MS,
};
