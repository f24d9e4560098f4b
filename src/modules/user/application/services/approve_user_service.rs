use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::email::application::ports::outgoing::UserEmailNotifier;
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};
use crate::user::application::ports::incoming::use_cases::{AdminUserError, ApproveUserUseCase};
use crate::user::application::ports::outgoing::{AdminUserRepository, AdminUserRepositoryError};

pub struct ApproveUserService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    repository: R,
    notification_writer: Arc<dyn NotificationWriter>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<R> ApproveUserService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        notification_writer: Arc<dyn NotificationWriter>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            repository,
            notification_writer,
            email_notifier,
        }
    }
}

#[async_trait]
impl<R> ApproveUserUseCase for ApproveUserService<R>
where
    R: AdminUserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        let user = match self.repository.set_approved(user_id, true).await {
            Ok(user) => user,
            Err(AdminUserRepositoryError::NotFound) => return Err(AdminUserError::NotFound),
            Err(e) => return Err(AdminUserError::RepositoryError(e.to_string())),
        };

        // Approval stands even if the follow-up notification or email fails.
        let notification = NewNotification::new(
            user.id,
            NotificationKind::System,
            "Account approved",
            "Your account has been approved. You can now join projects and log hours.",
        );
        if let Err(e) = self.notification_writer.notify(notification).await {
            tracing::warn!("failed to write approval notification for {}: {}", user.id, e);
        }

        let notifier = self.email_notifier.clone();
        let (to, firstname) = (user.email.clone(), user.firstname.clone());
        tokio::spawn(async move {
            if let Err(e) = notifier.send_account_approved_email(&to, &firstname).await {
                tracing::warn!("failed to send approval email to {}: {}", to, e);
            }
        });

        Ok(PublicUser::from(user))
    }
}
