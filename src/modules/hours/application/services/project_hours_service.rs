use async_trait::async_trait;
use uuid::Uuid;

use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
use crate::hours::application::ports::incoming::use_cases::{HoursError, ProjectHoursUseCase};
use crate::hours::application::ports::outgoing::HoursRepository;

pub struct ProjectHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    hours: H,
}

impl<H> ProjectHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    pub fn new(hours: H) -> Self {
        Self { hours }
    }
}

#[async_trait]
impl<H> ProjectHoursUseCase for ProjectHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        status: Option<HoursStatus>,
    ) -> Result<Vec<VolunteerHours>, HoursError> {
        self.hours
            .list_for_project(project_id, status)
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))
    }
}
