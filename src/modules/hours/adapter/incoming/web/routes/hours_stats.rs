use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hours::application::ports::incoming::use_cases::HoursError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/hours/stats")]
pub async fn hours_stats_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hours_stats_use_case.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(HoursError::NotFound) => {
            ApiResponse::not_found("HOURS_NOT_FOUND", "Hours entry not found")
        }

        Err(HoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error computing hours stats");
            ApiResponse::internal_error()
        }
    }
}
