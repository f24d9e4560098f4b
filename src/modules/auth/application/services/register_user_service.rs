use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    NewUserData, PasswordHasher, UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

pub struct RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            email_notifier,
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<PublicUser, RegisterUserError> {
        if self
            .repository
            .find_by_username(command.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::UsernameTaken);
        }

        if self
            .repository
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::EmailTaken);
        }

        if self
            .repository
            .find_by_phone(command.phone())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::PhoneTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .map_err(RegisterUserError::HashingError)?;

        let data = NewUserData {
            firstname: command.firstname().to_string(),
            lastname: command.lastname().to_string(),
            username: command.username().to_string(),
            email: command.email().to_string(),
            phone: command.phone().to_string(),
            password_hash,
            date_of_birth: command.date_of_birth(),
            gender: command.gender(),
            address: command.address().to_string(),
            bio: command.bio().to_string(),
            country: command.country().to_string(),
            skills: command.skills().to_vec(),
            other_skills: command.other_skills().to_string(),
            interests: command.interests().to_vec(),
            availability: command.availability().to_vec(),
        };

        let user = match self.repository.create_user(data).await {
            Ok(user) => user,
            Err(UserRepositoryError::DuplicateUsername) => {
                return Err(RegisterUserError::UsernameTaken)
            }
            Err(UserRepositoryError::DuplicateEmail) => return Err(RegisterUserError::EmailTaken),
            Err(UserRepositoryError::DuplicatePhone) => return Err(RegisterUserError::PhoneTaken),
            Err(e) => return Err(RegisterUserError::RepositoryError(e.to_string())),
        };

        // Welcome email is best-effort; registration succeeds even if the
        // SMTP relay is down.
        let notifier = self.email_notifier.clone();
        let (to, firstname) = (user.email.clone(), user.firstname.clone());
        tokio::spawn(async move {
            if let Err(e) = notifier.send_welcome_email(&to, &firstname).await {
                tracing::warn!("failed to send welcome email to {}: {}", to, e);
            }
        });

        Ok(PublicUser::from(user))
    }
}
