use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::user::application::ports::incoming::use_cases::{
    AdminUserError, BanUserUseCase, UnbanUserUseCase,
};
use crate::user::application::ports::outgoing::{AdminUserRepository, AdminUserRepositoryError};

/// One service backs both the ban and unban routes; the flag value is the
/// only difference.
pub struct ManageBanService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    repository: R,
}

impl<R> ManageBanService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn set_banned(&self, user_id: Uuid, banned: bool) -> Result<PublicUser, AdminUserError> {
        match self.repository.set_banned(user_id, banned).await {
            Ok(user) => Ok(PublicUser::from(user)),
            Err(AdminUserRepositoryError::NotFound) => Err(AdminUserError::NotFound),
            Err(e) => Err(AdminUserError::RepositoryError(e.to_string())),
        }
    }
}

#[async_trait]
impl<R> BanUserUseCase for ManageBanService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        self.set_banned(user_id, true).await
    }
}

#[async_trait]
impl<R> UnbanUserUseCase for ManageBanService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        self.set_banned(user_id, false).await
    }
}
