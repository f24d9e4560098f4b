use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::hours::application::domain::entities::HoursStatus;
use crate::hours::application::ports::incoming::use_cases::HoursError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectHoursParams {
    status: Option<String>,
}

#[get("/api/hours/project/{id}")]
pub async fn project_hours_handler(
    _staff: StaffUser,
    path: web::Path<Uuid>,
    params: web::Query<ProjectHoursParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match params.status.as_deref() {
        Some(value) => match HoursStatus::parse(value) {
            Some(status) => Some(status),
            None => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    &format!("Unknown hours status: {value}"),
                );
            }
        },
        None => None,
    };

    match data
        .project_hours_use_case
        .execute(path.into_inner(), status)
        .await
    {
        Ok(entries) => ApiResponse::success(entries),

        Err(HoursError::NotFound) => {
            ApiResponse::not_found("HOURS_NOT_FOUND", "Hours entry not found")
        }

        Err(HoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing project hours");
            ApiResponse::internal_error()
        }
    }
}
