use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::user::application::ports::incoming::use_cases::{AdminUserError, GetUserDetailsUseCase};
use crate::user::application::ports::outgoing::{AdminUserRepository, AdminUserRepositoryError};

pub struct GetUserDetailsService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetUserDetailsService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUserDetailsUseCase for GetUserDetailsService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        match self.repository.find_by_id(user_id).await {
            Ok(user) => Ok(PublicUser::from(user)),
            Err(AdminUserRepositoryError::NotFound) => Err(AdminUserError::NotFound),
            Err(e) => Err(AdminUserError::RepositoryError(e.to_string())),
        }
    }
}
