use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::auth::application::ports::outgoing::UserRepository;

pub struct FetchProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> FetchProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FetchProfileUseCase for FetchProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, FetchProfileError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::NotFound)?;

        Ok(PublicUser::from(user))
    }
}
