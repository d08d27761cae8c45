//! Merging per-tick timetable samples into bookable windows.
//!
//! The remote timetable arrives as a flat list of five-minute ticks flagged
//! free or busy. Booking a service needs a contiguous stretch at least as
//! long as the service itself, so this module folds runs of free ticks into
//! [`BookableWindow`]s and drops the runs that are too short.

use chrono::{Duration, NaiveTime};

use crate::types::{BookableWindow, TimeSlotSample, TICK_MINUTES};

/// Merge consecutive free ticks into windows of at least `required_minutes`.
///
/// Samples are processed in the order given; the remote emits them sorted by
/// time and this function does not re-sort. A run of free ticks spans from
/// its first tick to the far edge of its last tick, so two adjacent free
/// ticks form a ten-minute window. A busy tick closes the current run; so
/// does the end of input, which keeps availability at the tail of the day.
///
/// # Arguments
/// * `samples` - one day's timetable ticks, sorted by time
/// * `required_minutes` - minimum bookable stretch, from the service duration
pub fn merge_bookable_windows(
    samples: &[TimeSlotSample],
    required_minutes: u32,
) -> Vec<BookableWindow> {
    let mut windows = Vec::new();
    let mut open_run: Option<(NaiveTime, NaiveTime)> = None;

    for sample in samples {
        if sample.is_free {
            open_run = match open_run {
                None => Some((sample.time, sample.time)),
                Some((start, _)) => Some((start, sample.time)),
            };
        } else if let Some((start, last)) = open_run.take() {
            close_run(&mut windows, start, last, required_minutes);
        }
    }
    if let Some((start, last)) = open_run {
        close_run(&mut windows, start, last, required_minutes);
    }

    windows
}

/// Close the free run `[start ..= last]` and emit it when long enough.
///
/// The span check counts the trailing tick, so a single free tick satisfies
/// a five-minute requirement. The end addition wraps at midnight: a run
/// ending on the 23:55 tick closes at 00:00.
fn close_run(
    windows: &mut Vec<BookableWindow>,
    start: NaiveTime,
    last: NaiveTime,
    required_minutes: u32,
) {
    let span_minutes = (last - start).num_minutes() + TICK_MINUTES;
    if span_minutes >= i64::from(required_minutes) {
        let end = last + Duration::minutes(TICK_MINUTES);
        windows.push(BookableWindow::new(start, end));
    }
}
