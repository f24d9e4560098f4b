use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Rank;

/// A volunteer's ledger state right after an increment: the new cumulative
/// total and the rank as currently stored (which may now lag the total).
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot {
    pub total_hours: f64,
    pub rank: Rank,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VolunteerLedgerError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Volunteer not found")]
    NotFound,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerLedger: Send + Sync {
    /// Add verified hours to the volunteer's running total.
    async fn add_verified_hours(
        &self,
        volunteer_id: Uuid,
        hours: f64,
    ) -> Result<LedgerSnapshot, VolunteerLedgerError>;

    async fn set_rank(&self, volunteer_id: Uuid, rank: Rank) -> Result<(), VolunteerLedgerError>;
}
