use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};
use crate::project::application::domain::entities::{Project, ProjectStatus};
use crate::project::application::ports::incoming::use_cases::{
    UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectUpdateData,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R, notification_writer: Arc<dyn NotificationWriter>) -> Self {
        Self {
            repository,
            notification_writer,
        }
    }

    async fn announce_completion(&self, project: &Project) {
        let volunteer_ids = match self.repository.volunteer_ids(project.id).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(
                    "failed to load roster for completed project {}: {}",
                    project.id,
                    e
                );
                return;
            }
        };

        let notifications = volunteer_ids
            .into_iter()
            .map(|user_id| {
                NewNotification::new(
                    user_id,
                    NotificationKind::ProjectCompleted,
                    "Project completed",
                    &format!("{} has been marked completed. Thank you!", project.title),
                )
                .with_link(&format!("/projects/{}", project.id))
            })
            .collect();

        if let Err(e) = self.notification_writer.notify_many(notifications).await {
            tracing::warn!("failed to announce completion of {}: {}", project.id, e);
        }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        command: UpdateProjectCommand,
        edited_by: Uuid,
    ) -> Result<Project, UpdateProjectError> {
        let existing = match self.repository.find_by_id(project_id).await {
            Ok(project) => project,
            Err(ProjectRepositoryError::NotFound) => return Err(UpdateProjectError::NotFound),
            Err(e) => return Err(UpdateProjectError::RepositoryError(e.to_string())),
        };

        let data = ProjectUpdateData {
            title: command.title,
            description: command.description,
            status: command.status,
            start_date: command.start_date,
            end_date: command.end_date,
            location: command.location,
            community: command.community,
            beneficiaries_count: command.beneficiaries_count,
            requirements: command.requirements,
            needed_volunteers: command.needed_volunteers,
        };

        let updated = match self.repository.update_project(project_id, data, edited_by).await {
            Ok(project) => project,
            Err(ProjectRepositoryError::NotFound) => return Err(UpdateProjectError::NotFound),
            Err(ProjectRepositoryError::DuplicateTitle) => {
                return Err(UpdateProjectError::TitleTaken)
            }
            Err(e) => return Err(UpdateProjectError::RepositoryError(e.to_string())),
        };

        // Only an actual transition announces; re-saving a completed project
        // stays quiet.
        if updated.status == ProjectStatus::Completed && existing.status != ProjectStatus::Completed
        {
            self.announce_completion(&updated).await;
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::ports::outgoing::NotificationWriteError;
    use crate::project::application::ports::outgoing::project_repository::MockProjectRepository;
    use chrono::Utc;
    use std::sync::Mutex;

    fn project(id: Uuid, status: ProjectStatus) -> Project {
        Project {
            id,
            title: "Cleanup".to_string(),
            description: "Beach cleanup".to_string(),
            status,
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
    async fn completing_a_project_notifies_its_volunteers() {
        let project_id = Uuid::new_v4();
        let roster = vec![Uuid::new_v4(), Uuid::new_v4()];

        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |id| Ok(project(id, ProjectStatus::Ongoing)));
        repository
            .expect_update_project()
            .returning(move |id, _, _| Ok(project(id, ProjectStatus::Completed)));
        let roster_clone = roster.clone();
        repository
            .expect_volunteer_ids()
            .returning(move |_| Ok(roster_clone.clone()));

        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });
        let service = UpdateProjectService::new(repository, writer.clone());

        let command = UpdateProjectCommand {
            status: Some(ProjectStatus::Completed),
            ..Default::default()
        };
        let updated = service
            .execute(project_id, command, Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(updated.status, ProjectStatus::Completed);
        let written = writer.written.lock().unwrap();
        assert_eq!(written.len(), 2);
        assert!(written
            .iter()
            .all(|n| n.kind == NotificationKind::ProjectCompleted));
    }

    #[tokio::test]
    async fn resaving_a_completed_project_stays_quiet() {
        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |id| Ok(project(id, ProjectStatus::Completed)));
        repository
            .expect_update_project()
            .returning(move |id, _, _| Ok(project(id, ProjectStatus::Completed)));

        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });
        let service = UpdateProjectService::new(repository, writer.clone());

        let command = UpdateProjectCommand {
            status: Some(ProjectStatus::Completed),
            ..Default::default()
        };
        service
            .execute(Uuid::new_v4(), command, Uuid::new_v4())
            .await
            .unwrap();

        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Err(ProjectRepositoryError::NotFound));

        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });
        let service = UpdateProjectService::new(repository, writer);

        let result = service
            .execute(Uuid::new_v4(), UpdateProjectCommand::default(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(UpdateProjectError::NotFound)));
    }

    #[tokio::test]
    async fn duplicate_title_maps_to_title_taken() {
        let mut repository = MockProjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |id| Ok(project(id, ProjectStatus::Upcoming)));
        repository
            .expect_update_project()
            .returning(|_, _, _| Err(ProjectRepositoryError::DuplicateTitle));

        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });
        let service = UpdateProjectService::new(repository, writer);

        let command = UpdateProjectCommand {
            title: Some("Cleanup".to_string()),
            ..Default::default()
        };
        let result = service
            .execute(Uuid::new_v4(), command, Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(UpdateProjectError::TitleTaken)));
    }
}
