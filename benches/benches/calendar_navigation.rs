// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_calendar::{CalendarConfig, CalendarState, RangeCalendarConfig, RangeCalendarState};
use trellis_date::DateDuration;

fn month_state(visible_months: i32) -> CalendarState {
    CalendarState::new(CalendarConfig {
        focused_value: NaiveDate::from_ymd_opt(2024, 2, 15),
        visible_duration: DateDuration::of_months(visible_months),
        ..Default::default()
    })
    .expect("valid config")
}

fn weekend_state() -> RangeCalendarState<fn(NaiveDate) -> bool> {
    fn weekend(date: NaiveDate) -> bool {
        use chrono::Datelike;
        matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
    }
    RangeCalendarState::with_availability(
        RangeCalendarConfig {
            focused_value: NaiveDate::from_ymd_opt(2024, 2, 15),
            ..Default::default()
        },
        weekend as fn(NaiveDate) -> bool,
    )
    .expect("valid config")
}

fn bench_page_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_pages");
    for &months in &[1i32, 3, 12] {
        group.throughput(Throughput::Elements(240));
        group.bench_function(format!("next_page_x240_m{}", months), |b| {
            b.iter_batched(
                || month_state(months),
                |mut state| {
                    for _ in 0..240 {
                        state.focus_next_page();
                    }
                    black_box(state.visible_range());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_day_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_days");
    group.throughput(Throughput::Elements(366));
    group.bench_function("next_day_across_a_year", |b| {
        b.iter_batched(
            || month_state(1),
            |mut state| {
                for _ in 0..366 {
                    state.focus_next_day();
                }
                black_box(state.focused_date());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("row_zigzag", |b| {
        b.iter_batched(
            || month_state(1),
            |mut state| {
                for _ in 0..64 {
                    state.focus_next_row();
                    state.focus_next_day();
                    state.focus_previous_row();
                }
                black_box(state.focused_date());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_cell_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_cells");
    let state = month_state(3);
    let range = state.visible_range();
    group.bench_function("render_pass_3_months", |b| {
        b.iter(|| {
            let mut selected = 0usize;
            let mut disabled = 0usize;
            let mut date = range.start;
            while date <= range.end {
                if state.is_selected(date) {
                    selected += 1;
                }
                if state.is_cell_disabled(date) {
                    disabled += 1;
                }
                date = date.succ_opt().expect("in-range date");
            }
            black_box((selected, disabled));
        })
    });
    group.finish();
}

fn bench_range_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_drag");
    group.bench_function("drag_across_two_weeks", |b| {
        b.iter_batched(
            weekend_state,
            |mut state| {
                let start = NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date");
                state.begin_pointer_selection(start);
                let mut date = start;
                for _ in 0..14 {
                    date = date.succ_opt().expect("in-range date");
                    state.update_pointer_selection(date);
                }
                state.finish_pointer_selection(date);
                black_box(state.value());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_page_navigation,
    bench_day_stepping,
    bench_cell_predicates,
    bench_range_drag,
);
criterion_main!(benches);
