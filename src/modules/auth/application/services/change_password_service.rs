use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserRepository};

pub struct ChangePasswordService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> ChangePasswordService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> ChangePasswordUseCase for ChangePasswordService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::NotFound)?;

        let matches = self
            .password_hasher
            .verify_password(command.current_password(), &user.password_hash)
            .map_err(ChangePasswordError::HashingError)?;

        if !matches {
            return Err(ChangePasswordError::IncorrectCurrentPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(command.new_password())
            .map_err(ChangePasswordError::HashingError)?;

        self.repository
            .update_password(user_id, &new_hash)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))
    }
}
