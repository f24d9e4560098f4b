use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hours::application::domain::entities::HoursStatus;
use crate::hours::application::ports::incoming::use_cases::{HoursError, MyHoursQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MyHoursParams {
    status: Option<String>,
    project_id: Option<Uuid>,
}

#[get("/api/hours/my-hours")]
pub async fn my_hours_handler(
    user: AuthenticatedUser,
    params: web::Query<MyHoursParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

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

    let query = MyHoursQuery {
        status,
        project_id: params.project_id,
    };

    match data.my_hours_use_case.execute(user.user_id, query).await {
        Ok(response) => ApiResponse::success(response),

        Err(HoursError::NotFound) => {
            ApiResponse::not_found("HOURS_NOT_FOUND", "Hours entry not found")
        }

        Err(HoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing own hours");
            ApiResponse::internal_error()
        }
    }
}
