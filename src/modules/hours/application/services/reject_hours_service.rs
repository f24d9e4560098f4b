use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
use crate::hours::application::ports::incoming::use_cases::{DecideHoursError, RejectHoursUseCase};
use crate::hours::application::ports::outgoing::{HoursRepository, HoursRepositoryError};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};

const DEFAULT_REASON: &str = "No reason provided";

pub struct RejectHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    hours: H,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<H> RejectHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    pub fn new(hours: H, notification_writer: Arc<dyn NotificationWriter>) -> Self {
        Self {
            hours,
            notification_writer,
        }
    }
}

#[async_trait]
impl<H> RejectHoursUseCase for RejectHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    async fn execute(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
        reason: Option<String>,
    ) -> Result<VolunteerHours, DecideHoursError> {
        let entry = match self.hours.find_by_id(entry_id).await {
            Ok(entry) => entry,
            Err(HoursRepositoryError::NotFound) => return Err(DecideHoursError::NotFound),
            Err(e) => return Err(DecideHoursError::RepositoryError(e.to_string())),
        };

        if entry.status != HoursStatus::Pending {
            return Err(DecideHoursError::NotPending);
        }

        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REASON.to_string());

        let rejected = self
            .hours
            .mark_rejected(entry_id, verifier_id, reason.clone())
            .await
            .map_err(|e| DecideHoursError::RepositoryError(e.to_string()))?;

        let notification = NewNotification::new(
            rejected.volunteer_id,
            NotificationKind::HoursRejected,
            "Hours rejected",
            &format!("Your logged hours were rejected: {reason}"),
        )
        .with_link("/my-hours");

        if let Err(e) = self.notification_writer.notify(notification).await {
            tracing::warn!("failed to notify volunteer about rejection {}: {}", entry_id, e);
        }

        Ok(rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours::application::ports::outgoing::hours_repository::MockHoursRepository;
    use crate::notification::application::ports::outgoing::NotificationWriteError;
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;

    fn entry(id: Uuid, status: HoursStatus) -> VolunteerHours {
        VolunteerHours {
            id,
            volunteer_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            hours: 2.0,
            description: String::new(),
            date_worked: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
            status,
            verified_by: None,
            verified_at: None,
            rejection_reason: None,
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
    async fn a_blank_reason_falls_back_to_the_default() {
        let mut hours = MockHoursRepository::new();
        hours
            .expect_find_by_id()
            .returning(|id| Ok(entry(id, HoursStatus::Pending)));
        hours
            .expect_mark_rejected()
            .withf(|_, _, reason| reason == DEFAULT_REASON)
            .returning(|id, verifier, reason| {
                let mut e = entry(id, HoursStatus::Rejected);
                e.verified_by = Some(verifier);
                e.rejection_reason = Some(reason);
                Ok(e)
            });

        let writer = Arc::new(RecordingWriter {
            written: Mutex::new(vec![]),
        });
        let service = RejectHoursService::new(hours, writer.clone());

        let rejected = service
            .execute(Uuid::new_v4(), Uuid::new_v4(), Some("   ".to_string()))
            .await
            .unwrap();

        assert_eq!(rejected.status, HoursStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some(DEFAULT_REASON));

        let written = writer.written.lock().unwrap();
        assert_eq!(written[0].kind, NotificationKind::HoursRejected);
        assert!(written[0].message.contains(DEFAULT_REASON));
    }

    #[tokio::test]
    async fn a_verified_entry_cannot_be_rejected() {
        let mut hours = MockHoursRepository::new();
        hours
            .expect_find_by_id()
            .returning(|id| Ok(entry(id, HoursStatus::Verified)));

        let service = RejectHoursService::new(
            hours,
            Arc::new(RecordingWriter {
                written: Mutex::new(vec![]),
            }),
        );

        let result = service.execute(Uuid::new_v4(), Uuid::new_v4(), None).await;

        assert!(matches!(result, Err(DecideHoursError::NotPending)));
    }
}
