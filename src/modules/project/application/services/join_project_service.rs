use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};
use crate::project::application::domain::entities::JoinRequest;
use crate::project::application::ports::incoming::use_cases::{
    JoinProjectError, RequestToJoinUseCase,
};
use crate::project::application::ports::outgoing::{
    JoinRequestRepository, NewJoinRequest, ProjectRepository, ProjectRepositoryError,
};
use crate::user::application::ports::outgoing::UserDirectory;

pub struct JoinProjectService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    projects: P,
    requests: J,
    directory: Arc<dyn UserDirectory>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<P, J> JoinProjectService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    pub fn new(
        projects: P,
        requests: J,
        directory: Arc<dyn UserDirectory>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            projects,
            requests,
            directory,
            notification_writer,
        }
    }

    async fn notify_staff(&self, project_title: &str, request: &JoinRequest) {
        let staff_ids = match self.directory.staff_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("failed to load staff for join request notification: {}", e);
                return;
            }
        };

        let notifications = staff_ids
            .into_iter()
            .map(|user_id| {
                NewNotification::new(
                    user_id,
                    NotificationKind::System,
                    "New join request",
                    &format!("A volunteer asked to join {project_title}"),
                )
                .with_link("/requests/pending")
                .with_metadata(serde_json::json!({ "request_id": request.id }))
            })
            .collect();

        if let Err(e) = self.notification_writer.notify_many(notifications).await {
            tracing::warn!("failed to notify staff about request {}: {}", request.id, e);
        }
    }
}

#[async_trait]
impl<P, J> RequestToJoinUseCase for JoinProjectService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
        message: String,
    ) -> Result<JoinRequest, JoinProjectError> {
        let project = match self.projects.find_by_id(project_id).await {
            Ok(project) => project,
            Err(ProjectRepositoryError::NotFound) => return Err(JoinProjectError::ProjectNotFound),
            Err(e) => return Err(JoinProjectError::RepositoryError(e.to_string())),
        };

        let is_member = self
            .projects
            .is_volunteer(project_id, volunteer_id)
            .await
            .map_err(|e| JoinProjectError::RepositoryError(e.to_string()))?;
        if is_member {
            return Err(JoinProjectError::AlreadyMember);
        }

        let open = self
            .requests
            .find_pending(project_id, volunteer_id)
            .await
            .map_err(|e| JoinProjectError::RepositoryError(e.to_string()))?;
        if open.is_some() {
            return Err(JoinProjectError::AlreadyRequested);
        }

        let request = self
            .requests
            .create(NewJoinRequest {
                project_id,
                volunteer_id,
                message,
            })
            .await
            .map_err(|e| JoinProjectError::RepositoryError(e.to_string()))?;

        self.notify_staff(&project.title, &request).await;

        Ok(request)
    }
}
