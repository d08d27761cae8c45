//! Availability search across staff and days.
//!
//! [`search_availability`] drives the whole derivation: for every eligible
//! staff member and every day in the window it pulls one timetable from a
//! [`TimetableSource`], merges the ticks into bookable windows and collects
//! the results per staff member. Fetch failures are recorded and skipped so
//! one bad staff-day never sinks the rest of the search.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SourceError};
use crate::types::{DaySlots, ServiceRequirement, StaffAvailability, StaffMember, TimeSlotSample};
use crate::windows::merge_bookable_windows;

/// Days searched when the caller does not say otherwise.
pub const DEFAULT_DAY_WINDOW: u32 = 3;

/// Anything that can produce one staff member's timetable for one day.
///
/// Implementations own whatever scoping the backend needs (company, branch,
/// credentials); the engine only ever asks per staff and date. Returned
/// samples must be sorted by time, which is the order backends emit them in.
#[async_trait]
pub trait TimetableSource: Send + Sync {
    async fn fetch_timetable(
        &self,
        staff_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlotSample>, SourceError>;
}

/// One staff-day fetch that failed during a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub staff_id: u64,
    pub date: NaiveDate,
    pub error: SourceError,
}

/// Everything a search produced: per-staff windows plus recorded failures.
///
/// `staff` preserves roster order and always holds one entry per searched
/// staff member, empty or not. Callers that only care about the happy path
/// can ignore `failures`; callers that must tell "fully booked" apart from
/// "the backend was down" check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub staff: Vec<StaffAvailability>,
    pub failures: Vec<FetchFailure>,
}

impl AvailabilityReport {
    /// Name-keyed view of the staff results, for display purposes.
    ///
    /// Staff members sharing a display name collide and the later roster
    /// entry wins; key by `staff_id` through [`Self::staff`] when identity
    /// matters.
    pub fn by_staff_name(&self) -> BTreeMap<&str, &StaffAvailability> {
        self.staff
            .iter()
            .map(|member| (member.staff_name.as_str(), member))
            .collect()
    }
}

/// Find every bookable window for `service` across `staff` and `day_window`
/// consecutive days starting at `start_date`.
///
/// Staff are searched in roster order and days in ascending order, one fetch
/// per staff-day, so results and logs are deterministic. Days that produce no
/// window are omitted from a staff member's `days`; staff members with
/// nothing bookable anywhere still appear with an empty `days`.
///
/// # Errors
///
/// Returns [`SearchError::NoStaffForService`] when `staff` is empty. A failed
/// fetch is not an error: the staff-day lands in
/// [`AvailabilityReport::failures`] with a warn log and the day contributes
/// no windows.
pub async fn search_availability<S>(
    service: &ServiceRequirement,
    staff: &[StaffMember],
    start_date: NaiveDate,
    day_window: u32,
    source: &S,
) -> Result<AvailabilityReport, SearchError>
where
    S: TimetableSource + ?Sized,
{
    if staff.is_empty() {
        return Err(SearchError::NoStaffForService {
            service_id: service.service_id,
        });
    }

    let mut report = AvailabilityReport {
        staff: Vec::with_capacity(staff.len()),
        failures: Vec::new(),
    };

    for member in staff {
        let mut days = Vec::new();
        for offset in 0..day_window {
            let date = start_date + Duration::days(i64::from(offset));
            let samples = match source.fetch_timetable(member.id, date).await {
                Ok(samples) => samples,
                Err(error) => {
                    tracing::warn!(
                        staff_id = member.id,
                        %date,
                        %error,
                        "timetable fetch failed; day contributes no windows"
                    );
                    report.failures.push(FetchFailure {
                        staff_id: member.id,
                        date,
                        error,
                    });
                    continue;
                }
            };
            let windows = merge_bookable_windows(&samples, service.duration_minutes);
            if !windows.is_empty() {
                days.push(DaySlots { date, windows });
            }
        }
        report.staff.push(StaffAvailability {
            staff_id: member.id,
            staff_name: member.name.clone(),
            days,
        });
    }

    Ok(report)
}
