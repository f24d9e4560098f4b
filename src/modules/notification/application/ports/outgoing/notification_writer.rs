use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;

/// A notification about to be inserted.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub link: String,
    pub metadata: serde_json::Value,
}

impl NewNotification {
    pub fn new(user_id: Uuid, kind: NotificationKind, title: &str, message: &str) -> Self {
        Self {
            user_id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            link: String::new(),
            metadata: serde_json::json!({}),
        }
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = link.to_string();
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationWriteError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Insert-only port the other modules use to fan out notifications. There is
/// no delivery mechanism; clients poll the list endpoint.
#[async_trait]
pub trait NotificationWriter: Send + Sync {
    async fn notify(&self, notification: NewNotification) -> Result<(), NotificationWriteError>;

    async fn notify_many(
        &self,
        notifications: Vec<NewNotification>,
    ) -> Result<(), NotificationWriteError>;
}
