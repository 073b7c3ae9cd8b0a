// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range selection with a pointer drag.
//!
//! Simulates the host side of the drag protocol: activation by pointer kind,
//! press, a few moves, and release, with weekends marked unavailable.
//!
//! Run:
//! - `cargo run -p trellis_demos --example range_drag`

use chrono::{Datelike, NaiveDate, Weekday};
use trellis_calendar::{
    CalendarError, DragActivation, PointerKind, RangeCalendarConfig, RangeCalendarState,
    TOUCH_DRAG_DELAY_MS,
};

fn weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn main() -> Result<(), CalendarError> {
    // A touch host would arm a hold timer instead of starting immediately.
    match DragActivation::for_pointer(PointerKind::Touch) {
        DragActivation::Immediate => println!("touch: drag starts on press"),
        DragActivation::Deferred => {
            println!("touch: drag starts after a {TOUCH_DRAG_DELAY_MS}ms hold");
        }
    }

    let mut state = RangeCalendarState::with_availability(
        RangeCalendarConfig {
            focused_value: NaiveDate::from_ymd_opt(2024, 2, 5),
            ..Default::default()
        },
        weekend,
    )?;

    // Mouse press on Monday the 5th, drag to Friday the 9th.
    let press = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
    assert_eq!(
        DragActivation::for_pointer(PointerKind::Mouse),
        DragActivation::Immediate
    );
    state.begin_pointer_selection(press);
    println!("anchored at {:?}", state.anchor_date());
    println!("contiguous until {:?}", state.available_range().end);

    let mut date = press;
    while date < NaiveDate::from_ymd_opt(2024, 2, 9).unwrap() {
        date = date.succ_opt().unwrap();
        state.update_pointer_selection(date);
        println!("  over {date}: highlight {:?}", state.highlighted_range());
    }

    // Saturday is past the contiguity limit.
    let saturday = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    assert!(state.is_cell_disabled(saturday));

    state.finish_pointer_selection(date);
    println!("committed: {:?}", state.value());

    // Pressing the committed start re-anchors to the end, so the next drag
    // resizes instead of starting over.
    state.begin_pointer_selection(press);
    println!("re-anchored at {:?}", state.anchor_date());
    state.update_pointer_selection(press.succ_opt().unwrap());
    state.finish_pointer_selection(press.succ_opt().unwrap());
    println!("resized: {:?}", state.value());
    Ok(())
}
