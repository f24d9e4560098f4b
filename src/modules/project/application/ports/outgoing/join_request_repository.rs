use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{JoinRequest, JoinRequestStatus};

#[derive(Debug, Clone)]
pub struct NewJoinRequest {
    pub project_id: Uuid,
    pub volunteer_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum JoinRequestRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Join request not found")]
    NotFound,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JoinRequestRepository: Send + Sync {
    async fn create(&self, data: NewJoinRequest)
        -> Result<JoinRequest, JoinRequestRepositoryError>;

    /// The open request for this volunteer on this project, if any. At most
    /// one can be pending at a time.
    async fn find_pending(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<Option<JoinRequest>, JoinRequestRepositoryError>;

    async fn find_by_id(&self, request_id: Uuid)
        -> Result<JoinRequest, JoinRequestRepositoryError>;

    /// All pending requests, oldest first so reviewers work a queue.
    async fn list_pending(&self) -> Result<Vec<JoinRequest>, JoinRequestRepositoryError>;

    /// Stamps status, decided_by and decided_at.
    async fn decide(
        &self,
        request_id: Uuid,
        status: JoinRequestStatus,
        decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestRepositoryError>;
}
