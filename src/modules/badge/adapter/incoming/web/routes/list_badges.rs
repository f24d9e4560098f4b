use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::badge::application::ports::incoming::use_cases::BadgeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/badges")]
pub async fn list_badges_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_badges_use_case.execute().await {
        Ok(badges) => ApiResponse::success(badges),

        Err(BadgeError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing badges");
            ApiResponse::internal_error()
        }
    }
}
