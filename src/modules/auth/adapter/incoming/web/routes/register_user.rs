use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Gender;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisterUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct RegisterRequestDto {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub other_skills: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
}

#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, username = %dto.username, "Registration attempt");

    let date_of_birth = match NaiveDate::parse_from_str(&dto.date_of_birth, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "date_of_birth must be formatted YYYY-MM-DD",
            );
        }
    };

    let gender = match Gender::parse(&dto.gender) {
        Some(g) => g,
        None => {
            return ApiResponse::bad_request("VALIDATION_ERROR", "gender must be male or female");
        }
    };

    let command = match RegisterUserCommand::new(RegisterUserInput {
        firstname: dto.firstname,
        lastname: dto.lastname,
        username: dto.username,
        email: dto.email,
        phone: dto.phone,
        password: dto.password,
        date_of_birth,
        gender,
        address: dto.address,
        bio: dto.bio,
        country: dto.country,
        skills: dto.skills,
        other_skills: dto.other_skills,
        interests: dto.interests,
        availability: dto.availability,
    }) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.register_user_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(user)
        }

        Err(RegisterUserError::UsernameTaken) => {
            warn!("Registration failed: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }

        Err(RegisterUserError::EmailTaken) => {
            warn!("Registration failed: email taken");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }

        Err(RegisterUserError::PhoneTaken) => {
            warn!("Registration failed: phone taken");
            ApiResponse::conflict("PHONE_TAKEN", "Phone number already registered")
        }

        Err(RegisterUserError::HashingError(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during registration");
            ApiResponse::internal_error()
        }
    }
}
