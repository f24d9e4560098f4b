use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::hours::application::domain::entities::VolunteerHours;
use crate::hours::application::ports::incoming::use_cases::{
    LogHoursCommand, LogHoursError, LogHoursUseCase,
};
use crate::hours::application::ports::outgoing::{HoursRepository, NewHoursEntry};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::user::application::ports::outgoing::UserDirectory;

/// Records a pending hours entry for a project the volunteer belongs to and
/// flags the submission to every staff account.
pub struct LogHoursService<P, H>
where
    P: ProjectRepository + Send + Sync,
    H: HoursRepository + Send + Sync,
{
    projects: P,
    hours: H,
    directory: Arc<dyn UserDirectory>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<P, H> LogHoursService<P, H>
where
    P: ProjectRepository + Send + Sync,
    H: HoursRepository + Send + Sync,
{
    pub fn new(
        projects: P,
        hours: H,
        directory: Arc<dyn UserDirectory>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            projects,
            hours,
            directory,
            notification_writer,
        }
    }

    async fn notify_staff(&self, entry: &VolunteerHours) {
        let staff = match self.directory.staff_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("failed to load staff for hours notification: {}", e);
                return;
            }
        };

        let notifications = staff
            .into_iter()
            .map(|staff_id| {
                NewNotification::new(
                    staff_id,
                    NotificationKind::System,
                    "Hours awaiting verification",
                    &format!("A volunteer logged {} hours for verification.", entry.hours),
                )
                .with_link("/hours/pending")
                .with_metadata(serde_json::json!({ "entry_id": entry.id }))
            })
            .collect();

        if let Err(e) = self.notification_writer.notify_many(notifications).await {
            tracing::warn!("failed to notify staff about hours entry {}: {}", entry.id, e);
        }
    }
}

#[async_trait]
impl<P, H> LogHoursUseCase for LogHoursService<P, H>
where
    P: ProjectRepository + Send + Sync,
    H: HoursRepository + Send + Sync,
{
    async fn execute(
        &self,
        volunteer_id: Uuid,
        command: LogHoursCommand,
    ) -> Result<VolunteerHours, LogHoursError> {
        match self.projects.find_by_id(command.project_id()).await {
            Ok(_) => {}
            Err(ProjectRepositoryError::NotFound) => return Err(LogHoursError::ProjectNotFound),
            Err(e) => return Err(LogHoursError::RepositoryError(e.to_string())),
        }

        let is_member = self
            .projects
            .is_volunteer(command.project_id(), volunteer_id)
            .await
            .map_err(|e| LogHoursError::RepositoryError(e.to_string()))?;
        if !is_member {
            return Err(LogHoursError::NotProjectMember);
        }

        let entry = self
            .hours
            .create(NewHoursEntry {
                volunteer_id,
                project_id: command.project_id(),
                hours: command.hours(),
                description: command.description().to_string(),
                date_worked: command.date_worked(),
            })
            .await
            .map_err(|e| LogHoursError::RepositoryError(e.to_string()))?;

        self.notify_staff(&entry).await;

        Ok(entry)
    }
}
