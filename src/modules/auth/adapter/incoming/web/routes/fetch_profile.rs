use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn fetch_profile(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.fetch_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error fetching profile");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/auth/me")]
pub async fn me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    fetch_profile(user, data).await
}

#[get("/api/user/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch_profile(user, data).await
}
