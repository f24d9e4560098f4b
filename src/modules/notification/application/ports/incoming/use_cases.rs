use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::notification::application::domain::entities::Notification;
use crate::shared::api::Pagination;

const DEFAULT_LIMIT: u64 = 50;
const MAX_LIMIT: u64 = 100;

/// Normalized list query; out-of-range paging values are clamped rather
/// than rejected.
#[derive(Debug, Clone, Copy)]
pub struct ListNotificationsQuery {
    page: u64,
    limit: u64,
    read: Option<bool>,
}

impl ListNotificationsQuery {
    pub fn new(page: Option<u64>, limit: Option<u64>, read: Option<bool>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Self { page, limit, read }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn read(&self) -> Option<bool> {
        self.read
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub pagination: Pagination,
    pub unread_count: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Notification not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        query: ListNotificationsQuery,
    ) -> Result<NotificationListResponse, NotificationError>;
}

#[async_trait]
pub trait UnreadCountUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<u64, NotificationError>;
}

#[async_trait]
pub trait MarkNotificationReadUseCase: Send + Sync {
    async fn execute(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, NotificationError>;
}

#[async_trait]
pub trait MarkAllReadUseCase: Send + Sync {
    /// Returns how many notifications were newly marked read.
    async fn execute(&self, user_id: Uuid) -> Result<u64, NotificationError>;
}

#[async_trait]
pub trait DeleteNotificationUseCase: Send + Sync {
    async fn execute(&self, notification_id: Uuid, user_id: Uuid)
        -> Result<(), NotificationError>;
}
