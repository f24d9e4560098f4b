use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::project::application::domain::entities::ProjectStatus;
use crate::project::application::ports::incoming::use_cases::{ListProjectsQuery, ProjectError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    page: Option<u64>,
    limit: Option<u64>,
    status: Option<String>,
}

#[get("/api/project")]
pub async fn list_projects_handler(
    _user: AuthenticatedUser,
    params: web::Query<ListProjectsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let status = match params.status.as_deref() {
        Some(value) => match ProjectStatus::parse(value) {
            Some(status) => Some(status),
            None => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    &format!("Unknown project status: {value}"),
                );
            }
        },
        None => None,
    };

    let query = ListProjectsQuery::new(params.page, params.limit, status);

    match data.list_projects_use_case.execute(query).await {
        Ok(response) => ApiResponse::success(response),

        Err(ProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(ProjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing projects");
            ApiResponse::internal_error()
        }
    }
}
