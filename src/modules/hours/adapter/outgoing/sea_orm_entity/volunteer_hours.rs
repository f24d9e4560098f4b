use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteer_hours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub volunteer_id: Uuid,
    pub project_id: Uuid,
    pub hours: f64,
    pub description: String,
    pub date_worked: Date,
    pub status: String,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTimeWithTimeZone>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_domain(self) -> Result<VolunteerHours, String> {
        let status = HoursStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown hours status: {}", self.status))?;

        Ok(VolunteerHours {
            id: self.id,
            volunteer_id: self.volunteer_id,
            project_id: self.project_id,
            hours: self.hours,
            description: self.description,
            date_worked: self.date_worked,
            status,
            verified_by: self.verified_by,
            verified_at: self.verified_at.map(|t| t.to_utc()),
            rejection_reason: self.rejection_reason,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        })
    }
}
