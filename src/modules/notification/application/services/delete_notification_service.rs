use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationUseCase, NotificationError,
};
use crate::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};

pub struct DeleteNotificationService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteNotificationService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteNotificationUseCase for DeleteNotificationService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), NotificationError> {
        match self.repository.delete(notification_id, user_id).await {
            Ok(()) => Ok(()),
            Err(NotificationRepositoryError::NotFound) => Err(NotificationError::NotFound),
            Err(e) => Err(NotificationError::RepositoryError(e.to_string())),
        }
    }
}
