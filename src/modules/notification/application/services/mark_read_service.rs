use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::Notification;
use crate::notification::application::ports::incoming::use_cases::{
    MarkNotificationReadUseCase, NotificationError,
};
use crate::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};

pub struct MarkReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> MarkReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkNotificationReadUseCase for MarkReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, NotificationError> {
        match self.repository.mark_read(notification_id, user_id).await {
            Ok(notification) => Ok(notification),
            Err(NotificationRepositoryError::NotFound) => Err(NotificationError::NotFound),
            Err(e) => Err(NotificationError::RepositoryError(e.to_string())),
        }
    }
}
