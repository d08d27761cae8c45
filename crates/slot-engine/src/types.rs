//! Core data model for timetable samples, bookable windows and staff results.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Spacing of the remote timetable grid, in minutes.
///
/// Every sample marks the start of one five-minute tick, and a window that
/// ends on a free tick extends to that tick's far edge.
pub const TICK_MINUTES: i64 = 5;

/// Stand-in duration for services that report a zero (unset) seance length.
pub const FALLBACK_DURATION_SECONDS: u32 = 1200;

/// One tick of a staff member's daily timetable.
///
/// `time` is the tick's start on the timetable grid; `is_free` is whether the
/// tick can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotSample {
    pub time: NaiveTime,
    pub is_free: bool,
}

impl TimeSlotSample {
    pub fn new(time: NaiveTime, is_free: bool) -> Self {
        Self { time, is_free }
    }
}

/// A half-open stretch of bookable time `[start, end)` within one day.
///
/// Windows are produced by [`merge_bookable_windows`]: `start` is the first
/// free tick of a run and `end` is the last free tick plus one tick width, so
/// the window covers the full extent of the run. A run that touches midnight
/// wraps `end` to `00:00`.
///
/// [`merge_bookable_windows`]: crate::windows::merge_bookable_windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookableWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl BookableWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Length of the window in whole minutes.
    ///
    /// A window never has zero span, so an `end` at or before `start` means
    /// the run wrapped past midnight: `"23:50 - 00:00"` is ten minutes and a
    /// fully free day (`"00:00 - 00:00"`) is 1440.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        if minutes <= 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}

impl fmt::Display for BookableWindow {
    /// Renders as `"HH:MM - HH:MM"` in 24-hour form, e.g. `"09:00 - 10:30"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// How much contiguous free time a service needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequirement {
    pub service_id: u64,
    pub duration_minutes: u32,
}

impl ServiceRequirement {
    pub fn new(service_id: u64, duration_minutes: u32) -> Self {
        Self {
            service_id,
            duration_minutes,
        }
    }

    /// Derive the requirement from a remote seance length in seconds.
    ///
    /// A zero length means the service never had a duration configured and is
    /// replaced by [`FALLBACK_DURATION_SECONDS`] (twenty minutes) rather than
    /// matching every tick. Sub-minute remainders are truncated.
    pub fn from_seance_length(service_id: u64, seance_length_seconds: u32) -> Self {
        let seconds = if seance_length_seconds == 0 {
            FALLBACK_DURATION_SECONDS
        } else {
            seance_length_seconds
        };
        Self {
            service_id,
            duration_minutes: seconds / 60,
        }
    }
}

/// A staff member eligible to perform a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
}

impl StaffMember {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Bookable windows found on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub windows: Vec<BookableWindow>,
}

/// One staff member's availability across the searched day window.
///
/// `days` holds only dates that produced at least one window, in search
/// order; a staff member with nothing bookable has an empty `days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAvailability {
    pub staff_id: u64,
    pub staff_name: String,
    pub days: Vec<DaySlots>,
}
