use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::project::application::domain::entities::{
    JoinRequest, Project, ProjectDetails, ProjectStatus,
};
use crate::shared::api::Pagination;

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub community: String,
    pub beneficiaries_count: i32,
    pub requirements: Vec<String>,
    pub needed_volunteers: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectCommandError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("End date must not precede start date")]
    EndBeforeStart,
}

/// Validated project creation request.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    title: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    location: String,
    community: String,
    beneficiaries_count: i32,
    requirements: Vec<String>,
    needed_volunteers: Option<i32>,
}

impl CreateProjectCommand {
    pub fn new(input: CreateProjectInput) -> Result<Self, CreateProjectCommandError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(CreateProjectCommandError::EmptyTitle);
        }

        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(CreateProjectCommandError::EmptyDescription);
        }

        if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
            if end < start {
                return Err(CreateProjectCommandError::EndBeforeStart);
            }
        }

        Ok(Self {
            title,
            description,
            start_date: input.start_date,
            end_date: input.end_date,
            location: input.location,
            community: input.community,
            beneficiaries_count: input.beneficiaries_count,
            requirements: input.requirements,
            needed_volunteers: input.needed_volunteers,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn community(&self) -> &str {
        &self.community
    }

    pub fn beneficiaries_count(&self) -> i32 {
        self.beneficiaries_count
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    pub fn needed_volunteers(&self) -> Option<i32> {
        self.needed_volunteers
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("A project with this title already exists")]
    TitleTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Copy)]
pub struct ListProjectsQuery {
    page: u64,
    limit: u64,
    status: Option<ProjectStatus>,
}

impl ListProjectsQuery {
    pub fn new(page: Option<u64>, limit: Option<u64>, status: Option<ProjectStatus>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Self {
            page,
            limit,
            status,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        self.status
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectCommand {
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

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("A project with this title already exists")]
    TitleTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum JoinProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("A join request is already pending for this project")]
    AlreadyRequested,

    #[error("Already a volunteer on this project")]
    AlreadyMember,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum JoinRequestDecisionError {
    #[error("Join request not found")]
    NotFound,

    #[error("Join request has already been decided")]
    NotPending,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
        created_by: Uuid,
    ) -> Result<Project, CreateProjectError>;
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, query: ListProjectsQuery)
        -> Result<ProjectListResponse, ProjectError>;
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetails, ProjectError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        command: UpdateProjectCommand,
        edited_by: Uuid,
    ) -> Result<Project, UpdateProjectError>;
}

#[async_trait]
pub trait RequestToJoinUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
        message: String,
    ) -> Result<JoinRequest, JoinProjectError>;
}

#[async_trait]
pub trait ListPendingRequestsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<JoinRequest>, JoinRequestDecisionError>;
}

#[async_trait]
pub trait ApproveJoinRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        request_id: Uuid,
        decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError>;
}

#[async_trait]
pub trait RejectJoinRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        request_id: Uuid,
        decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError>;
}
