use async_trait::async_trait;
use chrono::NaiveDate;
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, PublicUser};

//
// ──────────────────────────────────────────────────────────
// Register
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    firstname: String,
    lastname: String,
    username: String,
    email: String,
    phone: String,
    password: String,
    date_of_birth: NaiveDate,
    gender: Gender,
    address: String,
    bio: String,
    country: String,
    skills: Vec<String>,
    other_skills: String,
    interests: Vec<String>,
    availability: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Firstname cannot be empty")]
    EmptyFirstname,

    #[error("Lastname cannot be empty")]
    EmptyLastname,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Phone cannot be empty")]
    EmptyPhone,

    #[error("Address cannot be empty")]
    EmptyAddress,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

pub struct RegisterUserInput {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
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

impl RegisterUserCommand {
    pub fn new(input: RegisterUserInput) -> Result<Self, RegisterCommandError> {
        let firstname = input.firstname.trim().to_string();
        if firstname.is_empty() {
            return Err(RegisterCommandError::EmptyFirstname);
        }

        let lastname = input.lastname.trim().to_string();
        if lastname.is_empty() {
            return Err(RegisterCommandError::EmptyLastname);
        }

        // Usernames are stored lowercase, matching the unique index
        let username = input.username.trim().to_lowercase();
        if username.is_empty() {
            return Err(RegisterCommandError::EmptyUsername);
        }

        let email = input.email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterCommandError::InvalidEmail);
        }

        let phone = input.phone.trim().to_string();
        if phone.is_empty() {
            return Err(RegisterCommandError::EmptyPhone);
        }

        if input.password.len() < 6 {
            return Err(RegisterCommandError::PasswordTooShort);
        }

        let address = input.address.trim().to_string();
        if address.is_empty() {
            return Err(RegisterCommandError::EmptyAddress);
        }

        Ok(Self {
            firstname,
            lastname,
            username,
            email,
            phone,
            password: input.password,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            address,
            bio: input.bio,
            country: input.country,
            skills: input.skills,
            other_skills: input.other_skills,
            interests: input.interests,
            availability: input.availability,
        })
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn other_skills(&self) -> &str {
        &self.other_skills
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn availability(&self) -> &[String] {
        &self.availability
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Phone number already registered")]
    PhoneTaken,

    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<PublicUser, RegisterUserError>;
}

//
// ──────────────────────────────────────────────────────────
// Login / Refresh
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginCommandError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is banned")]
    AccountBanned,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthTokens, LoginError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid or expired refresh token")]
    InvalidToken,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshedToken {
    pub access_token: String,
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshedToken, RefreshTokenError>;
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, FetchProfileError>;
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Phone number already registered")]
    PhoneTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<PublicUser, UpdateProfileError>;
}

//
// ──────────────────────────────────────────────────────────
// Change password
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordCommandError {
    #[error("Current password and new password are required")]
    MissingFields,

    #[error("New password must be at least 6 characters")]
    NewPasswordTooShort,
}

impl ChangePasswordCommand {
    pub fn new(
        current_password: String,
        new_password: String,
    ) -> Result<Self, ChangePasswordCommandError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(ChangePasswordCommandError::MissingFields);
        }
        if new_password.len() < 6 {
            return Err(ChangePasswordCommandError::NewPasswordTooShort);
        }

        Ok(Self {
            current_password,
            new_password,
        })
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("User not found")]
    NotFound,

    #[error("Current password is incorrect")]
    IncorrectCurrentPassword,

    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}
