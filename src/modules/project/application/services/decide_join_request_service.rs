use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};
use crate::project::application::domain::entities::{JoinRequest, JoinRequestStatus};
use crate::project::application::ports::incoming::use_cases::{
    ApproveJoinRequestUseCase, JoinRequestDecisionError, RejectJoinRequestUseCase,
};
use crate::project::application::ports::outgoing::{
    JoinRequestRepository, JoinRequestRepositoryError, ProjectRepository,
};

/// Handles both outcomes of a pending join request. Approval also adds the
/// volunteer to the project roster before the decision is stamped.
pub struct DecideJoinRequestService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    projects: P,
    requests: J,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<P, J> DecideJoinRequestService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    pub fn new(projects: P, requests: J, notification_writer: Arc<dyn NotificationWriter>) -> Self {
        Self {
            projects,
            requests,
            notification_writer,
        }
    }

    async fn load_pending(
        &self,
        request_id: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError> {
        let request = match self.requests.find_by_id(request_id).await {
            Ok(request) => request,
            Err(JoinRequestRepositoryError::NotFound) => {
                return Err(JoinRequestDecisionError::NotFound)
            }
            Err(e) => return Err(JoinRequestDecisionError::RepositoryError(e.to_string())),
        };

        if request.status != JoinRequestStatus::Pending {
            return Err(JoinRequestDecisionError::NotPending);
        }

        Ok(request)
    }

    async fn notify_volunteer(&self, request: &JoinRequest, kind: NotificationKind) {
        let (title, message) = match kind {
            NotificationKind::RequestApproved => (
                "Join request approved",
                "Your request to join the project was approved. Welcome aboard!",
            ),
            _ => (
                "Join request rejected",
                "Your request to join the project was not approved this time.",
            ),
        };

        let notification = NewNotification::new(request.volunteer_id, kind, title, message)
            .with_link(&format!("/projects/{}", request.project_id));

        if let Err(e) = self.notification_writer.notify(notification).await {
            tracing::warn!(
                "failed to notify volunteer about request {}: {}",
                request.id,
                e
            );
        }
    }
}

#[async_trait]
impl<P, J> ApproveJoinRequestUseCase for DecideJoinRequestService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        request_id: Uuid,
        decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError> {
        let request = self.load_pending(request_id).await?;

        self.projects
            .add_volunteer(request.project_id, request.volunteer_id)
            .await
            .map_err(|e| JoinRequestDecisionError::RepositoryError(e.to_string()))?;

        let decided = self
            .requests
            .decide(request_id, JoinRequestStatus::Approved, decided_by)
            .await
            .map_err(|e| JoinRequestDecisionError::RepositoryError(e.to_string()))?;

        self.notify_volunteer(&decided, NotificationKind::RequestApproved)
            .await;

        Ok(decided)
    }
}

#[async_trait]
impl<P, J> RejectJoinRequestUseCase for DecideJoinRequestService<P, J>
where
    P: ProjectRepository + Send + Sync,
    J: JoinRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        request_id: Uuid,
        decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError> {
        let request = self.load_pending(request_id).await?;

        let decided = self
            .requests
            .decide(request.id, JoinRequestStatus::Rejected, decided_by)
            .await
            .map_err(|e| JoinRequestDecisionError::RepositoryError(e.to_string()))?;

        self.notify_volunteer(&decided, NotificationKind::RequestRejected)
            .await;

        Ok(decided)
    }
}
