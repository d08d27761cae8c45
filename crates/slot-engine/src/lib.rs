//! # slot-engine
//!
//! Derives bookable appointment windows from per-tick booking timetables.
//!
//! The engine is deliberately backend-agnostic: it consumes plain timetable
//! samples through the [`TimetableSource`] trait and never talks HTTP itself.
//! Feed it a service duration, a staff roster and a starting date, and it
//! answers which contiguous stretches of free time are long enough to book.
//!
//! ## Modules
//!
//! - [`types`] — samples, windows, requirements and per-staff results
//! - [`windows`] — merging free ticks into bookable windows
//! - [`availability`] — the staff-by-day search and its report
//! - [`error`] — source and search failures

pub mod availability;
pub mod error;
pub mod types;
pub mod windows;

pub use availability::{
    search_availability, AvailabilityReport, FetchFailure, TimetableSource, DEFAULT_DAY_WINDOW,
};
pub use error::{SearchError, SourceError};
pub use types::{
    BookableWindow, DaySlots, ServiceRequirement, StaffAvailability, StaffMember, TimeSlotSample,
    FALLBACK_DURATION_SECONDS, TICK_MINUTES,
};
pub use windows::merge_bookable_windows;
