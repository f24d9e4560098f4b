use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::Rank;
use crate::hours::application::ports::outgoing::{
    LedgerSnapshot, VolunteerLedger, VolunteerLedgerError,
};

/// Maintains the per-user running totals on the users table.
#[derive(Clone, Debug)]
pub struct VolunteerLedgerPostgres {
    db: Arc<DatabaseConnection>,
}

impl VolunteerLedgerPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, volunteer_id: Uuid) -> Result<UserModel, VolunteerLedgerError> {
        UserEntity::find_by_id(volunteer_id)
            .one(&*self.db)
            .await
            .map_err(|e| VolunteerLedgerError::DatabaseError(e.to_string()))?
            .ok_or(VolunteerLedgerError::NotFound)
    }
}

#[async_trait]
impl VolunteerLedger for VolunteerLedgerPostgres {
    async fn add_verified_hours(
        &self,
        volunteer_id: Uuid,
        hours: f64,
    ) -> Result<LedgerSnapshot, VolunteerLedgerError> {
        let user = self.load(volunteer_id).await?;

        let rank = Rank::parse(&user.rank)
            .ok_or_else(|| VolunteerLedgerError::DatabaseError(format!("unknown rank: {}", user.rank)))?;
        let total_hours = user.total_hours + hours;

        let mut active: UserActiveModel = user.into();
        active.total_hours = Set(total_hours);
        active
            .update(&*self.db)
            .await
            .map_err(|e| VolunteerLedgerError::DatabaseError(e.to_string()))?;

        Ok(LedgerSnapshot { total_hours, rank })
    }

    async fn set_rank(&self, volunteer_id: Uuid, rank: Rank) -> Result<(), VolunteerLedgerError> {
        let user = self.load(volunteer_id).await?;

        let mut active: UserActiveModel = user.into();
        active.rank = Set(rank.as_str().to_string());
        active
            .update(&*self.db)
            .await
            .map_err(|e| VolunteerLedgerError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
