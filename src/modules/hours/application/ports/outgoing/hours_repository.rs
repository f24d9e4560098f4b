use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};

#[derive(Debug, Clone)]
pub struct NewHoursEntry {
    pub volunteer_id: Uuid,
    pub project_id: Uuid,
    pub hours: f64,
    pub description: String,
    pub date_worked: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MyHoursFilter {
    pub status: Option<HoursStatus>,
    pub project_id: Option<Uuid>,
}

/// A volunteer's cumulative verified hours, for the leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerTotal {
    pub volunteer_id: Uuid,
    pub total_hours: f64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HoursRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Hours entry not found")]
    NotFound,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HoursRepository: Send + Sync {
    async fn create(&self, entry: NewHoursEntry) -> Result<VolunteerHours, HoursRepositoryError>;

    async fn find_by_id(&self, entry_id: Uuid) -> Result<VolunteerHours, HoursRepositoryError>;

    /// A volunteer's own entries, newest first.
    async fn list_my(
        &self,
        volunteer_id: Uuid,
        filter: MyHoursFilter,
    ) -> Result<Vec<VolunteerHours>, HoursRepositoryError>;

    /// Sum of one volunteer's hours in the given status, across all projects.
    async fn sum_hours(
        &self,
        volunteer_id: Uuid,
        status: HoursStatus,
    ) -> Result<f64, HoursRepositoryError>;

    async fn list_for_project(
        &self,
        project_id: Uuid,
        status: Option<HoursStatus>,
    ) -> Result<Vec<VolunteerHours>, HoursRepositoryError>;

    /// Every pending entry, newest first.
    async fn list_pending(&self) -> Result<Vec<VolunteerHours>, HoursRepositoryError>;

    async fn mark_verified(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
    ) -> Result<VolunteerHours, HoursRepositoryError>;

    async fn mark_rejected(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
        reason: String,
    ) -> Result<VolunteerHours, HoursRepositoryError>;

    async fn total_verified_hours(&self) -> Result<f64, HoursRepositoryError>;

    async fn pending_count(&self) -> Result<u64, HoursRepositoryError>;

    /// Highest cumulative verified hours first.
    async fn top_volunteers(&self, limit: u64) -> Result<Vec<VolunteerTotal>, HoursRepositoryError>;
}
