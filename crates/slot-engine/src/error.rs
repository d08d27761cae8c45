//! Error types for availability searches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single timetable fetch against the backing source failed.
///
/// The engine does not know transport details; the source renders whatever
/// went wrong into a display message. Cloneable and serializable so recorded
/// failures can travel inside an availability report.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failures that abort an availability search outright.
///
/// Per-day fetch failures do not belong here; they are recorded in the
/// report and the search carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The service has no eligible staff, so there is nothing to search.
    #[error("no staff can perform service {service_id}")]
    NoStaffForService { service_id: u64 },
}
