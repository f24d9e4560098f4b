use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
use crate::hours::application::ports::outgoing::VolunteerTotal;

const MIN_HOURS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct LogHoursInput {
    pub project_id: Uuid,
    pub hours: f64,
    pub description: String,
    pub date_worked: NaiveDate,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogHoursCommandError {
    #[error("Hours must be at least 0.5")]
    HoursTooSmall,

    #[error("Hours must be a finite number")]
    HoursNotFinite,
}

/// Validated hour submission.
#[derive(Debug, Clone)]
pub struct LogHoursCommand {
    project_id: Uuid,
    hours: f64,
    description: String,
    date_worked: NaiveDate,
}

impl LogHoursCommand {
    pub fn new(input: LogHoursInput) -> Result<Self, LogHoursCommandError> {
        if !input.hours.is_finite() {
            return Err(LogHoursCommandError::HoursNotFinite);
        }
        if input.hours < MIN_HOURS {
            return Err(LogHoursCommandError::HoursTooSmall);
        }

        Ok(Self {
            project_id: input.project_id,
            hours: input.hours,
            description: input.description.trim().to_string(),
            date_worked: input.date_worked,
        })
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_worked(&self) -> NaiveDate {
        self.date_worked
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogHoursError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Not a volunteer on this project")]
    NotProjectMember,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MyHoursQuery {
    pub status: Option<HoursStatus>,
    pub project_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyHoursResponse {
    pub entries: Vec<VolunteerHours>,
    pub total_verified: f64,
    pub total_pending: f64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HoursError {
    #[error("Hours entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DecideHoursError {
    #[error("Hours entry not found")]
    NotFound,

    #[error("Hours entry has already been decided")]
    NotPending,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct HoursStatsResponse {
    pub total_verified_hours: f64,
    pub pending_count: u64,
    pub top_volunteers: Vec<VolunteerTotal>,
}

#[async_trait]
pub trait LogHoursUseCase: Send + Sync {
    async fn execute(
        &self,
        volunteer_id: Uuid,
        command: LogHoursCommand,
    ) -> Result<VolunteerHours, LogHoursError>;
}

#[async_trait]
pub trait MyHoursUseCase: Send + Sync {
    async fn execute(
        &self,
        volunteer_id: Uuid,
        query: MyHoursQuery,
    ) -> Result<MyHoursResponse, HoursError>;
}

#[async_trait]
pub trait ProjectHoursUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        status: Option<HoursStatus>,
    ) -> Result<Vec<VolunteerHours>, HoursError>;
}

#[async_trait]
pub trait PendingHoursUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<VolunteerHours>, HoursError>;
}

#[async_trait]
pub trait VerifyHoursUseCase: Send + Sync {
    async fn execute(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
    ) -> Result<VolunteerHours, DecideHoursError>;
}

#[async_trait]
pub trait RejectHoursUseCase: Send + Sync {
    async fn execute(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
        reason: Option<String>,
    ) -> Result<VolunteerHours, DecideHoursError>;
}

#[async_trait]
pub trait HoursStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<HoursStatsResponse, HoursError>;
}
