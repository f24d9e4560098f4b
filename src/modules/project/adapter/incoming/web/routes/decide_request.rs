use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::project::application::domain::entities::JoinRequest;
use crate::project::application::ports::incoming::use_cases::JoinRequestDecisionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn decision_response(
    result: Result<JoinRequest, JoinRequestDecisionError>,
    staff_id: Uuid,
) -> actix_web::HttpResponse {
    match result {
        Ok(request) => {
            info!(
                request_id = %request.id,
                decider_id = %staff_id,
                status = request.status.as_str(),
                "Join request decided"
            );
            ApiResponse::success(request)
        }

        Err(JoinRequestDecisionError::NotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "Join request not found")
        }

        Err(JoinRequestDecisionError::NotPending) => ApiResponse::bad_request(
            "NOT_PENDING",
            "This join request has already been decided",
        ),

        Err(JoinRequestDecisionError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error deciding join request");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/project/requests/{id}/approve")]
pub async fn approve_request_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .approve_join_request_use_case
        .execute(path.into_inner(), staff.user_id)
        .await;
    decision_response(result, staff.user_id)
}

#[put("/api/project/requests/{id}/reject")]
pub async fn reject_request_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .reject_join_request_use_case
        .execute(path.into_inner(), staff.user_id)
        .await;
    decision_response(result, staff.user_id)
}
