use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{
    ProfileUpdateData, UserRepository, UserRepositoryError,
};

pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<PublicUser, UpdateProfileError> {
        let email = match command.email {
            Some(raw) => {
                let email = raw.trim().to_lowercase();
                if !EmailAddress::is_valid(&email) {
                    return Err(UpdateProfileError::InvalidEmail);
                }
                Some(email)
            }
            None => None,
        };

        let data = ProfileUpdateData {
            firstname: command.firstname,
            lastname: command.lastname,
            email,
            phone: command.phone,
            bio: command.bio,
            address: command.address,
            profile_picture: command.profile_picture,
        };

        match self.repository.update_profile(user_id, data).await {
            Ok(user) => Ok(PublicUser::from(user)),
            Err(UserRepositoryError::NotFound) => Err(UpdateProfileError::NotFound),
            Err(UserRepositoryError::DuplicateEmail) => Err(UpdateProfileError::EmailTaken),
            Err(UserRepositoryError::DuplicatePhone) => Err(UpdateProfileError::PhoneTaken),
            Err(e) => Err(UpdateProfileError::RepositoryError(e.to_string())),
        }
    }
}
