use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Audience lookups for notification fan-out. Read-only.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Approved, unbanned accounts with the volunteer role.
    async fn approved_volunteer_ids(&self) -> Result<Vec<Uuid>, UserDirectoryError>;

    /// Admins and mobilizers.
    async fn staff_ids(&self) -> Result<Vec<Uuid>, UserDirectoryError>;
}
