use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{PublicUser, Role};
use crate::shared::api::Pagination;

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;

/// Normalized admin listing query. Paging values out of range are clamped,
/// a blank search collapses to no search.
#[derive(Debug, Clone)]
pub struct ListUsersQuery {
    page: u64,
    limit: u64,
    role: Option<Role>,
    is_approved: Option<bool>,
    search: Option<String>,
}

impl ListUsersQuery {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        role: Option<Role>,
        is_approved: Option<bool>,
        search: Option<String>,
    ) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            page,
            limit,
            role,
            is_approved,
            search,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_approved(&self) -> Option<bool> {
        self.is_approved
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub users: Vec<PublicUser>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminUserError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, query: ListUsersQuery) -> Result<UserListResponse, AdminUserError>;
}

#[async_trait]
pub trait GetUserDetailsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError>;
}

/// Approving an already approved account is a no-op, not an error.
#[async_trait]
pub trait ApproveUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError>;
}

#[async_trait]
pub trait BanUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError>;
}

#[async_trait]
pub trait UnbanUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError>;
}
