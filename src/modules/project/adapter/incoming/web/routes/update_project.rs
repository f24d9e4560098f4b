use actix_web::{patch, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::project::application::domain::entities::ProjectStatus;
use crate::project::application::ports::incoming::use_cases::{
    UpdateProjectCommand, UpdateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub community: Option<String>,
    pub beneficiaries_count: Option<i32>,
    pub requirements: Option<Vec<String>>,
    pub needed_volunteers: Option<i32>,
}

#[patch("/api/project/{id}")]
pub async fn update_project_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    dto: web::Json<UpdateProjectDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let dto = dto.into_inner();

    let command = UpdateProjectCommand {
        title: dto.title,
        description: dto.description,
        status: dto.status,
        start_date: dto.start_date,
        end_date: dto.end_date,
        location: dto.location,
        community: dto.community,
        beneficiaries_count: dto.beneficiaries_count,
        requirements: dto.requirements,
        needed_volunteers: dto.needed_volunteers,
    };

    match data
        .update_project_use_case
        .execute(project_id, command, staff.user_id)
        .await
    {
        Ok(project) => {
            info!(project_id = %project.id, editor_id = %staff.user_id, "Project updated");
            ApiResponse::success(project)
        }

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::TitleTaken) => ApiResponse::conflict(
            "TITLE_TAKEN",
            "A project with this title already exists",
        ),

        Err(UpdateProjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error updating project");
            ApiResponse::internal_error()
        }
    }
}
