use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};

#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }
}

#[async_trait::async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_welcome_email(
        &self,
        to: &str,
        firstname: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let html_body = format!(
            r#"
            <p>Hi {},</p>
            <p>Welcome to the volunteer community! Your registration has been received.</p>
            <p>
                An administrator will review your account shortly. You will get another
                email once your account is approved.
            </p>
            <p>Thanks for signing up to make a difference.</p>
            "#,
            firstname
        );

        self.sender
            .send_email(to, "Welcome aboard", &html_body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }

    async fn send_account_approved_email(
        &self,
        to: &str,
        firstname: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let html_body = format!(
            r#"
            <p>Hi {},</p>
            <p>Good news! Your volunteer account has been approved.</p>
            <p>
                You can now log in, browse projects, and start logging your
                volunteer hours.
            </p>
            <p>See you out there!</p>
            "#,
            firstname
        );

        self.sender
            .send_email(to, "Your account has been approved", &html_body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}
