use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::ProjectDetails;
use crate::project::application::ports::incoming::use_cases::{GetProjectUseCase, ProjectError};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

pub struct GetProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectUseCase for GetProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetails, ProjectError> {
        let project = match self.repository.find_by_id(project_id).await {
            Ok(project) => project,
            Err(ProjectRepositoryError::NotFound) => return Err(ProjectError::NotFound),
            Err(e) => return Err(ProjectError::RepositoryError(e.to_string())),
        };

        let volunteer_ids = self
            .repository
            .volunteer_ids(project_id)
            .await
            .map_err(|e| ProjectError::RepositoryError(e.to_string()))?;

        Ok(ProjectDetails {
            project,
            volunteer_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::domain::entities::{Project, ProjectStatus};
    use crate::project::application::ports::outgoing::{
        NewProjectData, ProjectPage, ProjectUpdateData,
    };
    use chrono::Utc;

    struct MockRepository {
        volunteers: Vec<Uuid>,
    }

    #[async_trait]
    impl ProjectRepository for MockRepository {
        async fn create_project(
            &self,
            _data: NewProjectData,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn list_projects(
            &self,
            _status: Option<ProjectStatus>,
            _page: u64,
            _limit: u64,
        ) -> Result<ProjectPage, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, project_id: Uuid) -> Result<Project, ProjectRepositoryError> {
            Ok(Project {
                id: project_id,
                title: "Cleanup".to_string(),
                description: "Beach cleanup".to_string(),
                status: ProjectStatus::Ongoing,
                start_date: None,
                end_date: None,
                location: "Takoradi".to_string(),
                community: String::new(),
                beneficiaries_count: 0,
                requirements: vec![],
                needed_volunteers: None,
                created_by: Uuid::new_v4(),
                edited_by: None,
                edited_at: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn update_project(
            &self,
            _project_id: Uuid,
            _data: ProjectUpdateData,
            _edited_by: Uuid,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn volunteer_ids(
            &self,
            _project_id: Uuid,
        ) -> Result<Vec<Uuid>, ProjectRepositoryError> {
            Ok(self.volunteers.clone())
        }

        async fn is_volunteer(
            &self,
            _project_id: Uuid,
            _volunteer_id: Uuid,
        ) -> Result<bool, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn add_volunteer(
            &self,
            _project_id: Uuid,
            _volunteer_id: Uuid,
        ) -> Result<(), ProjectRepositoryError> {
            unimplemented!()
        }
    }

    struct MockNotFound;

    #[async_trait]
    impl ProjectRepository for MockNotFound {
        async fn create_project(
            &self,
            _data: NewProjectData,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn list_projects(
            &self,
            _status: Option<ProjectStatus>,
            _page: u64,
            _limit: u64,
        ) -> Result<ProjectPage, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _project_id: Uuid) -> Result<Project, ProjectRepositoryError> {
            Err(ProjectRepositoryError::NotFound)
        }

        async fn update_project(
            &self,
            _project_id: Uuid,
            _data: ProjectUpdateData,
            _edited_by: Uuid,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn volunteer_ids(
            &self,
            _project_id: Uuid,
        ) -> Result<Vec<Uuid>, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn is_volunteer(
            &self,
            _project_id: Uuid,
            _volunteer_id: Uuid,
        ) -> Result<bool, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn add_volunteer(
            &self,
            _project_id: Uuid,
            _volunteer_id: Uuid,
        ) -> Result<(), ProjectRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn details_include_the_roster() {
        let volunteers = vec![Uuid::new_v4(), Uuid::new_v4()];
        let service = GetProjectService::new(MockRepository {
            volunteers: volunteers.clone(),
        });

        let details = service.execute(Uuid::new_v4()).await.unwrap();

        assert_eq!(details.volunteer_ids, volunteers);
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let service = GetProjectService::new(MockNotFound);

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ProjectError::NotFound)));
    }
}
