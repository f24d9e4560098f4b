use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub community: String,
    #[serde(default)]
    pub beneficiaries_count: i32,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub needed_volunteers: Option<i32>,
}

#[post("/api/project")]
pub async fn create_project_handler(
    staff: StaffUser,
    dto: web::Json<CreateProjectDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = dto.into_inner();

    let command = match CreateProjectCommand::new(CreateProjectInput {
        title: dto.title,
        description: dto.description,
        start_date: dto.start_date,
        end_date: dto.end_date,
        location: dto.location,
        community: dto.community,
        beneficiaries_count: dto.beneficiaries_count,
        requirements: dto.requirements,
        needed_volunteers: dto.needed_volunteers,
    }) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .create_project_use_case
        .execute(command, staff.user_id)
        .await
    {
        Ok(project) => {
            info!(project_id = %project.id, "Project created");
            ApiResponse::created(project)
        }

        Err(CreateProjectError::TitleTaken) => ApiResponse::conflict(
            "TITLE_TAKEN",
            "A project with this title already exists",
        ),

        Err(CreateProjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error creating project");
            ApiResponse::internal_error()
        }
    }
}
