use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::hours::application::ports::incoming::use_cases::HoursError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/hours/pending")]
pub async fn pending_hours_handler(_staff: StaffUser, data: web::Data<AppState>) -> impl Responder {
    match data.pending_hours_use_case.execute().await {
        Ok(entries) => ApiResponse::success(entries),

        Err(HoursError::NotFound) => {
            ApiResponse::not_found("HOURS_NOT_FOUND", "Hours entry not found")
        }

        Err(HoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing pending hours");
            ApiResponse::internal_error()
        }
    }
}
