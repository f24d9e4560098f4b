use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::hours::application::domain::entities::{rank_for_hours, HoursStatus, VolunteerHours};
use crate::hours::application::ports::incoming::use_cases::{DecideHoursError, VerifyHoursUseCase};
use crate::hours::application::ports::outgoing::{
    HoursRepository, HoursRepositoryError, VolunteerLedger,
};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NewNotification, NotificationWriter};

/// Verifies a pending entry, credits the hours to the volunteer's running
/// total and recomputes their rank. The steps run sequentially without a
/// transaction; a failure partway leaves the earlier writes in place.
pub struct VerifyHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    hours: H,
    ledger: Arc<dyn VolunteerLedger>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl<H> VerifyHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    pub fn new(
        hours: H,
        ledger: Arc<dyn VolunteerLedger>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            hours,
            ledger,
            notification_writer,
        }
    }

    async fn notify(&self, notification: NewNotification) {
        if let Err(e) = self.notification_writer.notify(notification).await {
            tracing::warn!("failed to write hours notification: {}", e);
        }
    }
}

#[async_trait]
impl<H> VerifyHoursUseCase for VerifyHoursService<H>
where
    H: HoursRepository + Send + Sync,
{
    async fn execute(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
    ) -> Result<VolunteerHours, DecideHoursError> {
        let entry = match self.hours.find_by_id(entry_id).await {
            Ok(entry) => entry,
            Err(HoursRepositoryError::NotFound) => return Err(DecideHoursError::NotFound),
            Err(e) => return Err(DecideHoursError::RepositoryError(e.to_string())),
        };

        if entry.status != HoursStatus::Pending {
            return Err(DecideHoursError::NotPending);
        }

        let verified = self
            .hours
            .mark_verified(entry_id, verifier_id)
            .await
            .map_err(|e| DecideHoursError::RepositoryError(e.to_string()))?;

        let snapshot = self
            .ledger
            .add_verified_hours(verified.volunteer_id, verified.hours)
            .await
            .map_err(|e| DecideHoursError::RepositoryError(e.to_string()))?;

        let new_rank = rank_for_hours(snapshot.total_hours);
        if new_rank != snapshot.rank {
            self.ledger
                .set_rank(verified.volunteer_id, new_rank)
                .await
                .map_err(|e| DecideHoursError::RepositoryError(e.to_string()))?;

            self.notify(
                NewNotification::new(
                    verified.volunteer_id,
                    NotificationKind::BadgeEarned,
                    "Rank Up!",
                    &format!("Congratulations, you are now a {}!", new_rank.display_name()),
                )
                .with_metadata(serde_json::json!({ "rank": new_rank.as_str() })),
            )
            .await;
        }

        self.notify(
            NewNotification::new(
                verified.volunteer_id,
                NotificationKind::HoursVerified,
                "Hours verified",
                &format!("{} hours you logged have been verified.", verified.hours),
            )
            .with_link("/my-hours"),
        )
        .await;

        Ok(verified)
    }
}
