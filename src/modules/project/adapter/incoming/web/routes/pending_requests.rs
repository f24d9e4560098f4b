use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::project::application::ports::incoming::use_cases::JoinRequestDecisionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/project/requests/pending")]
pub async fn pending_requests_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_pending_requests_use_case.execute().await {
        Ok(requests) => ApiResponse::success(requests),

        Err(JoinRequestDecisionError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing pending join requests");
            ApiResponse::internal_error()
        }

        Err(_) => ApiResponse::internal_error(),
    }
}
