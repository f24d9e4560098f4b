use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    ListProjectsQuery, ListProjectsUseCase, ProjectError, ProjectListResponse,
};
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::shared::api::Pagination;

pub struct ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        query: ListProjectsQuery,
    ) -> Result<ProjectListResponse, ProjectError> {
        let page = self
            .repository
            .list_projects(query.status(), query.page(), query.limit())
            .await
            .map_err(|e| ProjectError::RepositoryError(e.to_string()))?;

        Ok(ProjectListResponse {
            pagination: Pagination::new(query.page(), query.limit(), page.total),
            projects: page.projects,
        })
    }
}
