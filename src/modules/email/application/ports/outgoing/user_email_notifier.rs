#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Account lifecycle emails sent to volunteers.
#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_welcome_email(
        &self,
        to: &str,
        firstname: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_account_approved_email(
        &self,
        to: &str,
        firstname: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
