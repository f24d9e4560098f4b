use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, User};

/// Input DTO for inserting a user. Password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUserData {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub bio: String,
    pub country: String,
    pub skills: Vec<String>,
    pub other_skills: String,
    pub interests: Vec<String>,
    pub availability: Vec<String>,
}

/// Partial profile update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdateData {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    NotFound,

    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Phone number already registered")]
    DuplicatePhone,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: NewUserData) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_username(&self, username: &str)
        -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: ProfileUpdateData,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), UserRepositoryError>;
}
