use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{
    AuthTokens, LoginCommand, LoginError, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};

pub struct LoginUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LoginUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> LoginUserUseCase for LoginUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthTokens, LoginError> {
        let user = self
            .repository
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // Banned accounts are refused outright; unapproved accounts may still
        // log in and browse, they just cannot join projects yet.
        if user.is_banned {
            return Err(LoginError::AccountBanned);
        }

        let matches = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .map_err(LoginError::VerificationFailed)?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            user: PublicUser::from(user),
        })
    }
}
