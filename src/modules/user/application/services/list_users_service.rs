use async_trait::async_trait;

use crate::auth::application::domain::entities::PublicUser;
use crate::shared::api::Pagination;
use crate::user::application::ports::incoming::use_cases::{
    AdminUserError, ListUsersQuery, ListUsersUseCase, UserListResponse,
};
use crate::user::application::ports::outgoing::{AdminUserRepository, UserListFilter};

pub struct ListUsersService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListUsersService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListUsersUseCase for ListUsersService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    async fn execute(&self, query: ListUsersQuery) -> Result<UserListResponse, AdminUserError> {
        let filter = UserListFilter {
            role: query.role(),
            is_approved: query.is_approved(),
            search: query.search().map(|s| s.to_string()),
        };

        let page = self
            .repository
            .list_users(filter, query.page(), query.limit())
            .await
            .map_err(|e| AdminUserError::RepositoryError(e.to_string()))?;

        Ok(UserListResponse {
            pagination: Pagination::new(query.page(), query.limit(), page.total),
            users: page.users.into_iter().map(PublicUser::from).collect(),
        })
    }
}
