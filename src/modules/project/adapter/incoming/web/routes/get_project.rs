use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::project::application::ports::incoming::use_cases::ProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/project/{id}")]
pub async fn get_project_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.get_project_use_case.execute(project_id).await {
        Ok(details) => ApiResponse::success(details),

        Err(ProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(ProjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error fetching project");
            ApiResponse::internal_error()
        }
    }
}
