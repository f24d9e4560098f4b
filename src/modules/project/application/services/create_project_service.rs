use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::project::application::ports::outgoing::{
    NewProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::user::application::ports::outgoing::UserDirectory;

pub struct CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
    directory: Arc<dyn UserDirectory>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        directory: Arc<dyn UserDirectory>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            repository,
            directory,
            notification_writer,
        }
    }

    async fn announce(&self, project: &Project) {
        let volunteer_ids = match self.directory.approved_volunteer_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("failed to load fan-out audience for new project: {}", e);
                return;
            }
        };

        let notifications = volunteer_ids
            .into_iter()
            .map(|user_id| {
                NewNotification::new(
                    user_id,
                    NotificationKind::NewProject,
                    "New project",
                    &format!("A new project is open for volunteers: {}", project.title),
                )
                .with_link(&format!("/projects/{}", project.id))
            })
            .collect();

        if let Err(e) = self.notification_writer.notify_many(notifications).await {
            tracing::warn!("failed to announce project {}: {}", project.id, e);
        }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
        created_by: Uuid,
    ) -> Result<Project, CreateProjectError> {
        let data = NewProjectData {
            title: command.title().to_string(),
            description: command.description().to_string(),
            start_date: command.start_date(),
            end_date: command.end_date(),
            location: command.location().to_string(),
            community: command.community().to_string(),
            beneficiaries_count: command.beneficiaries_count(),
            requirements: command.requirements().to_vec(),
            needed_volunteers: command.needed_volunteers(),
            created_by,
        };

        let project = match self.repository.create_project(data).await {
            Ok(project) => project,
            Err(ProjectRepositoryError::DuplicateTitle) => {
                return Err(CreateProjectError::TitleTaken)
            }
            Err(e) => return Err(CreateProjectError::RepositoryError(e.to_string())),
        };

        // The announcement is best-effort; the project exists either way.
        self.announce(&project).await;

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::ports::outgoing::NotificationWriteError;
    use crate::project::application::domain::entities::ProjectStatus;
    use crate::project::application::ports::incoming::use_cases::CreateProjectInput;
    use crate::project::application::ports::outgoing::{ProjectPage, ProjectUpdateData};
    use crate::user::application::ports::outgoing::UserDirectoryError;
    use chrono::Utc;
    use std::sync::Mutex;

    fn command() -> CreateProjectCommand {
        CreateProjectCommand::new(CreateProjectInput {
            title: "Tree Planting".to_string(),
            description: "Plant trees along the riverbank".to_string(),
            start_date: None,
            end_date: None,
            location: "Accra".to_string(),
            community: "Riverside".to_string(),
            beneficiaries_count: 120,
            requirements: vec![],
            needed_volunteers: Some(25),
        })
        .unwrap()
    }

    fn project(created_by: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Tree Planting".to_string(),
            description: "Plant trees along the riverbank".to_string(),
            status: ProjectStatus::Upcoming,
            start_date: None,
            end_date: None,
            location: "Accra".to_string(),
            community: "Riverside".to_string(),
            beneficiaries_count: 120,
            requirements: vec![],
            needed_volunteers: Some(25),
            created_by,
            edited_by: None,
            edited_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct MockRepository {
        duplicate: bool,
    }

    #[async_trait]
    impl ProjectRepository for MockRepository {
        async fn create_project(
            &self,
            data: NewProjectData,
        ) -> Result<Project, ProjectRepositoryError> {
            if self.duplicate {
                return Err(ProjectRepositoryError::DuplicateTitle);
            }
            Ok(project(data.created_by))
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
            unimplemented!()
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

    struct StubDirectory {
        volunteers: Vec<Uuid>,
    }

    #[async_trait]
    impl UserDirectory for StubDirectory {
        async fn approved_volunteer_ids(&self) -> Result<Vec<Uuid>, UserDirectoryError> {
            Ok(self.volunteers.clone())
        }

        async fn staff_ids(&self) -> Result<Vec<Uuid>, UserDirectoryError> {
            Ok(vec![])
        }
    }

    struct RecordingWriter {
        written: Mutex<Vec<NewNotification>>,
    }

    #[async_trait]
    impl NotificationWriter for RecordingWriter {
        async fn notify(
            &self,
            notification: NewNotification,
        ) -> Result<(), NotificationWriteError> {
            self.written.lock().unwrap().push(notification);
            Ok(())
        }

        async fn notify_many(
            &self,
            notifications: Vec<NewNotification>,
        ) -> Result<(), NotificationWriteError> {
            self.written.lock().unwrap().extend(notifications);
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_fans_out_to_approved_volunteers() {
        let volunteers = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });

        let service = CreateProjectService::new(
            MockRepository { duplicate: false },
            Arc::new(StubDirectory {
                volunteers: volunteers.clone(),
            }),
            writer.clone(),
        );

        let project = service.execute(command(), Uuid::new_v4()).await.unwrap();

        assert_eq!(project.title, "Tree Planting");
        let written = writer.written.lock().unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|n| n.kind == NotificationKind::NewProject));
        assert!(written.iter().any(|n| n.user_id == volunteers[2]));
    }

    #[tokio::test]
    async fn duplicate_title_maps_to_title_taken() {
        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });

        let service = CreateProjectService::new(
            MockRepository { duplicate: true },
            Arc::new(StubDirectory { volunteers: vec![] }),
            writer.clone(),
        );

        let result = service.execute(command(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(CreateProjectError::TitleTaken)));
        assert!(writer.written.lock().unwrap().is_empty());
    }
}
