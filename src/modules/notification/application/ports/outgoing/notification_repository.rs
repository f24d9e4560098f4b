use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::Notification;

/// One page of a user's notifications, newest first.
#[derive(Debug, Clone)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub unread: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Notification not found")]
    NotFound,
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// `read` filters by read state when present. Offset/limit paging.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        read: Option<bool>,
        page: u64,
        limit: u64,
    ) -> Result<NotificationPage, NotificationRepositoryError>;

    async fn unread_count(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError>;

    /// Marks one notification read. NotFound covers both a missing row and a
    /// row owned by someone else.
    async fn mark_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, NotificationRepositoryError>;

    /// Returns how many rows flipped from unread to read.
    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError>;

    async fn delete(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), NotificationRepositoryError>;
}
