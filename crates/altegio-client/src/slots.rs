//! Bridge between the HTTP client and the availability engine.
//!
//! The engine asks for timetables per staff and date; [`CompanyTimetable`]
//! answers those questions out of one company's data. [`find_available_slots`]
//! wires the whole pipeline together in a single call.

use async_trait::async_trait;
use chrono::NaiveDate;
use slot_engine::{
    search_availability, AvailabilityReport, SearchError, ServiceRequirement, SourceError,
    StaffMember, TimeSlotSample, TimetableSource,
};
use thiserror::Error;

use crate::client::AltegioClient;
use crate::error::ApiError;
use crate::models::{SeanceTick, ServiceDetail};

/// Failure modes of the end-to-end slot search.
///
/// `Api` covers the up-front service lookup; once the search is running,
/// per-day fetch problems are recorded inside the report instead.
#[derive(Debug, Error)]
pub enum FindSlotsError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// [`TimetableSource`] that scopes an [`AltegioClient`] to one company.
///
/// Borrowed from the client, so it costs nothing to make one per search.
pub struct CompanyTimetable<'a> {
    client: &'a AltegioClient,
    company_id: u64,
}

impl<'a> CompanyTimetable<'a> {
    pub(crate) fn new(client: &'a AltegioClient, company_id: u64) -> Self {
        Self { client, company_id }
    }
}

#[async_trait]
impl TimetableSource for CompanyTimetable<'_> {
    async fn fetch_timetable(
        &self,
        staff_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlotSample>, SourceError> {
        let ticks = self
            .client
            .timetable(self.company_id, staff_id, date)
            .await
            .map_err(|err| SourceError::new(err.to_string()))?;
        Ok(seances_to_samples(ticks))
    }
}

/// Convert wire ticks into engine samples, preserving order.
pub fn seances_to_samples(ticks: Vec<SeanceTick>) -> Vec<TimeSlotSample> {
    ticks
        .into_iter()
        .map(|tick| TimeSlotSample::new(tick.time, tick.is_free))
        .collect()
}

/// The staff roster of a service detail as search input, in remote order.
pub fn staff_roster(detail: &ServiceDetail) -> Vec<StaffMember> {
    detail
        .staff
        .iter()
        .map(|member| StaffMember::new(member.id, member.name.clone()))
        .collect()
}

/// Find bookable windows for one service across its whole staff roster.
///
/// Fetches the service detail once, derives the duration requirement and
/// roster from it, then searches `day_window` consecutive days starting at
/// `start_date`.
///
/// # Errors
///
/// [`FindSlotsError::Api`] when the service lookup fails and
/// [`FindSlotsError::Search`] when the roster is empty. Individual staff-day
/// fetch failures land in [`AvailabilityReport::failures`].
pub async fn find_available_slots(
    client: &AltegioClient,
    company_id: u64,
    service_id: u64,
    start_date: NaiveDate,
    day_window: u32,
) -> Result<AvailabilityReport, FindSlotsError> {
    let detail = client.service(company_id, service_id).await?;
    let requirement = ServiceRequirement::from_seance_length(service_id, detail.seance_length);
    let roster = staff_roster(&detail);
    tracing::debug!(
        service_id,
        duration_minutes = requirement.duration_minutes,
        staff = roster.len(),
        "resolved service for slot search"
    );

    let source = client.timetable_source(company_id);
    let report = search_availability(&requirement, &roster, start_date, day_window, &source).await?;
    Ok(report)
}
