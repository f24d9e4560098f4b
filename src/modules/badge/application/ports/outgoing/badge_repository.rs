use async_trait::async_trait;

use crate::badge::application::domain::entities::Badge;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BadgeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgeRepository: Send + Sync {
    /// Active badge definitions, lowest criteria first.
    async fn list_active(&self) -> Result<Vec<Badge>, BadgeRepositoryError>;
}
