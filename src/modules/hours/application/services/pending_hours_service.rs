use async_trait::async_trait;

use crate::hours::application::domain::entities::VolunteerHours;
use crate::hours::application::ports::incoming::use_cases::{HoursError, PendingHoursUseCase};
use crate::hours::application::ports::outgoing::HoursRepository;

pub struct PendingHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    hours: H,
}

impl<H> PendingHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    pub fn new(hours: H) -> Self {
        Self { hours }
    }
}

#[async_trait]
impl<H> PendingHoursUseCase for PendingHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<VolunteerHours>, HoursError> {
        self.hours
            .list_pending()
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))
    }
}
