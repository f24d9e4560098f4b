use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::incoming::use_cases::{
    NotificationError, UnreadCountUseCase,
};
use crate::notification::application::ports::outgoing::NotificationRepository;

pub struct UnreadCountService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> UnreadCountService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UnreadCountUseCase for UnreadCountService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<u64, NotificationError> {
        self.repository
            .unread_count(user_id)
            .await
            .map_err(|e| NotificationError::RepositoryError(e.to_string()))
    }
}
