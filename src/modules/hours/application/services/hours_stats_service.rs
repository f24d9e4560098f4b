use async_trait::async_trait;

use crate::hours::application::ports::incoming::use_cases::{
    HoursError, HoursStatsResponse, HoursStatsUseCase,
};
use crate::hours::application::ports::outgoing::HoursRepository;

const LEADERBOARD_SIZE: u64 = 10;

pub struct HoursStatsService<H>
where
    H: HoursRepository + Send + Sync,
{
    hours: H,
}

impl<H> HoursStatsService<H>
where
    H: HoursRepository + Send + Sync,
{
    pub fn new(hours: H) -> Self {
        Self { hours }
    }
}

#[async_trait]
impl<H> HoursStatsUseCase for HoursStatsService<H>
where
    H: HoursRepository + Send + Sync,
{
    async fn execute(&self) -> Result<HoursStatsResponse, HoursError> {
        let total_verified_hours = self
            .hours
            .total_verified_hours()
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))?;

        let pending_count = self
            .hours
            .pending_count()
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))?;

        let top_volunteers = self
            .hours
            .top_volunteers(LEADERBOARD_SIZE)
            .await
            .map_err(|e| HoursError::RepositoryError(e.to_string()))?;

        Ok(HoursStatsResponse {
            total_verified_hours,
            pending_count,
            top_volunteers,
        })
    }
}
