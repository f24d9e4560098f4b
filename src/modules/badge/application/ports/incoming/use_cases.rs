use async_trait::async_trait;

use crate::badge::application::domain::entities::Badge;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BadgeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListBadgesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Badge>, BadgeError>;
}
