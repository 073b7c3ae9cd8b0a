// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar keyboard walkthrough.
//!
//! Drive a one-month calendar with simulated arrow/page keys and print the
//! visible page after each step.
//!
//! Run:
//! - `cargo run -p trellis_demos --example calendar_keyboard`

use chrono::NaiveDate;
use trellis_calendar::{CalendarConfig, CalendarError, CalendarState};

fn print_state(label: &str, state: &CalendarState) {
    let range = state.visible_range();
    println!(
        "{label:>14}: focused {} page {} .. {}",
        state.focused_date(),
        range.start,
        range.end
    );
}

fn main() -> Result<(), CalendarError> {
    let mut state = CalendarState::new(CalendarConfig {
        focused_value: NaiveDate::from_ymd_opt(2024, 2, 15),
        min_value: NaiveDate::from_ymd_opt(2024, 1, 1),
        max_value: NaiveDate::from_ymd_opt(2024, 12, 31),
        ..Default::default()
    })?;
    print_state("start", &state);

    // Right arrow: one day.
    state.focus_next_day();
    print_state("ArrowRight", &state);

    // Down arrow: one row (a week).
    state.focus_next_row();
    print_state("ArrowDown", &state);

    // Page down: one full page, realigned to the month.
    state.focus_next_page();
    print_state("PageDown", &state);

    // Home/End: section bounds.
    state.focus_section_start();
    print_state("Home", &state);
    state.focus_section_end();
    print_state("End", &state);

    // Paging back past the minimum clamps at January.
    state.focus_previous_page();
    state.focus_previous_page();
    state.focus_previous_page();
    print_state("PageUp x3", &state);
    assert_eq!(state.visible_range().start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    // Enter: select the focused date; the host drains the focus intent to
    // move real focus to its cell.
    state.select_focused_date();
    println!("selected: {:?}", state.value());
    println!("focus intent: {:?}", state.take_focus_intent());
    Ok(())
}
