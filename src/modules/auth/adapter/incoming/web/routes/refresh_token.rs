use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};

use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct RefreshRequestDto {
    pub refresh_token: String,
}

#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.refresh_token_use_case.execute(&dto.refresh_token).await {
        Ok(refreshed) => ApiResponse::success(refreshed),

        Err(RefreshTokenError::InvalidToken) => {
            warn!("Refresh failed: invalid or expired token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
