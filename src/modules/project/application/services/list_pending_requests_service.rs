use async_trait::async_trait;

use crate::project::application::domain::entities::JoinRequest;
use crate::project::application::ports::incoming::use_cases::{
    JoinRequestDecisionError, ListPendingRequestsUseCase,
};
use crate::project::application::ports::outgoing::JoinRequestRepository;

pub struct ListPendingRequestsService<J>
where
    J: JoinRequestRepository + Send + Sync,
{
    requests: J,
}

impl<J> ListPendingRequestsService<J>
where
    J: JoinRequestRepository + Send + Sync,
{
    pub fn new(requests: J) -> Self {
        Self { requests }
    }
}

#[async_trait]
impl<J> ListPendingRequestsUseCase for ListPendingRequestsService<J>
where
    J: JoinRequestRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<JoinRequest>, JoinRequestDecisionError> {
        self.requests
            .list_pending()
            .await
            .map_err(|e| JoinRequestDecisionError::RepositoryError(e.to_string()))
    }
}
