use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::hours::application::ports::incoming::use_cases::DecideHoursError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RejectHoursDto {
    pub reason: Option<String>,
}

#[put("/api/hours/reject/{id}")]
pub async fn reject_hours_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    dto: web::Json<RejectHoursDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data
        .reject_hours_use_case
        .execute(entry_id, staff.user_id, dto.into_inner().reason)
        .await
    {
        Ok(entry) => {
            info!(entry_id = %entry.id, verifier_id = %staff.user_id, "Hours rejected");
            ApiResponse::success(entry)
        }

        Err(DecideHoursError::NotFound) => {
            ApiResponse::not_found("HOURS_NOT_FOUND", "Hours entry not found")
        }

        Err(DecideHoursError::NotPending) => ApiResponse::bad_request(
            "NOT_PENDING",
            "This hours entry has already been decided",
        ),

        Err(DecideHoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error rejecting hours");
            ApiResponse::internal_error()
        }
    }
}
