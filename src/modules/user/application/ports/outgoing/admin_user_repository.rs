use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};

/// Filters for the admin user listing. `search` matches firstname, lastname,
/// email and username case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    pub role: Option<Role>,
    pub is_approved: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminUserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    NotFound,
}

#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Newest accounts first. Offset/limit paging.
    async fn list_users(
        &self,
        filter: UserListFilter,
        page: u64,
        limit: u64,
    ) -> Result<UserPage, AdminUserRepositoryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<User, AdminUserRepositoryError>;

    /// Returns the user after the write. Setting the flag to its current
    /// value is a valid no-op.
    async fn set_approved(
        &self,
        user_id: Uuid,
        approved: bool,
    ) -> Result<User, AdminUserRepositoryError>;

    async fn set_banned(
        &self,
        user_id: Uuid,
        banned: bool,
    ) -> Result<User, AdminUserRepositoryError>;
}
