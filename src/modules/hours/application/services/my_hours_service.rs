use async_trait::async_trait;
use uuid::Uuid;

use crate::hours::application::domain::entities::HoursStatus;
use crate::hours::application::ports::incoming::use_cases::{
    HoursError, MyHoursQuery, MyHoursResponse, MyHoursUseCase,
};
use crate::hours::application::ports::outgoing::{HoursRepository, MyHoursFilter};

/// Own entries plus verified/pending totals. The totals always cover every
/// entry of the volunteer, regardless of the list filters.
pub struct MyHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    hours: H,
}

impl<H> MyHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    pub fn new(hours: H) -> Self {
        Self { hours }
    }
}

#[async_trait]
impl<H> MyHoursUseCase for MyHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    async fn execute(
        &self,
        volunteer_id: Uuid,
        query: MyHoursQuery,
    ) -> Result<MyHoursResponse, HoursError> {
        let entries = self
            .hours
            .list_my(
                volunteer_id,
                MyHoursFilter {
                    status: query.status,
                    project_id: query.project_id,
                },
            )
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))?;

        let total_verified = self
            .hours
            .sum_hours(volunteer_id, HoursStatus::Verified)
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))?;

        let total_pending = self
            .hours
            .sum_hours(volunteer_id, HoursStatus::Pending)
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))?;

        Ok(MyHoursResponse {
            entries,
            total_verified,
            total_pending,
        })
    }
}
