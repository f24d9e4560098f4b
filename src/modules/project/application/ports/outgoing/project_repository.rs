use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::project::application::domain::entities::{Project, ProjectStatus};

#[derive(Debug, Clone)]
pub struct NewProjectData {
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub community: String,
    pub beneficiaries_count: i32,
    pub requirements: Vec<String>,
    pub needed_volunteers: Option<i32>,
    pub created_by: Uuid,
}

/// Partial update. The repository stamps edited_by/edited_at on every write.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdateData {
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

#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Project not found")]
    NotFound,

    #[error("Duplicate project title")]
    DuplicateTitle,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: NewProjectData)
        -> Result<Project, ProjectRepositoryError>;

    /// Newest first. Offset/limit paging.
    async fn list_projects(
        &self,
        status: Option<ProjectStatus>,
        page: u64,
        limit: u64,
    ) -> Result<ProjectPage, ProjectRepositoryError>;

    async fn find_by_id(&self, project_id: Uuid) -> Result<Project, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: Uuid,
        data: ProjectUpdateData,
        edited_by: Uuid,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn volunteer_ids(&self, project_id: Uuid) -> Result<Vec<Uuid>, ProjectRepositoryError>;

    async fn is_volunteer(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<bool, ProjectRepositoryError>;

    /// Adding an existing member is a no-op.
    async fn add_volunteer(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<(), ProjectRepositoryError>;
}
