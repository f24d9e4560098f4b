use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdateProfileDto {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
}

#[put("/api/user/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = UpdateProfileCommand {
        firstname: dto.firstname,
        lastname: dto.lastname,
        email: dto.email,
        phone: dto.phone,
        bio: dto.bio,
        address: dto.address,
        profile_picture: dto.profile_picture,
    };

    match data
        .update_profile_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(profile)
        }

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::InvalidEmail) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid email format")
        }

        Err(UpdateProfileError::EmailTaken) => {
            warn!(user_id = %user.user_id, "Profile update: email taken");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }

        Err(UpdateProfileError::PhoneTaken) => {
            warn!(user_id = %user.user_id, "Profile update: phone taken");
            ApiResponse::conflict("PHONE_TAKEN", "Phone number already registered")
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error updating profile");
            ApiResponse::internal_error()
        }
    }
}
