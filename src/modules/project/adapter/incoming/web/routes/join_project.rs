use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::VolunteerUser;
use crate::project::application::ports::incoming::use_cases::JoinProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct JoinProjectDto {
    #[serde(default)]
    pub message: String,
}

#[post("/api/project/{id}/join")]
pub async fn join_project_handler(
    user: VolunteerUser,
    path: web::Path<Uuid>,
    dto: web::Json<JoinProjectDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .request_to_join_use_case
        .execute(project_id, user.user_id, dto.into_inner().message)
        .await
    {
        Ok(request) => {
            info!(request_id = %request.id, project_id = %project_id, "Join request submitted");
            ApiResponse::created(request)
        }

        Err(JoinProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(JoinProjectError::AlreadyRequested) => ApiResponse::bad_request(
            "ALREADY_REQUESTED",
            "You already have a pending request for this project",
        ),

        Err(JoinProjectError::AlreadyMember) => ApiResponse::bad_request(
            "ALREADY_MEMBER",
            "You are already a volunteer on this project",
        ),

        Err(JoinProjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error submitting join request");
            ApiResponse::internal_error()
        }
    }
}
