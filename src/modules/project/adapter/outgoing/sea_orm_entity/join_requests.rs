use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::project::application::domain::entities::{JoinRequest, JoinRequestStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "join_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub project_id: Uuid,
    pub volunteer_id: Uuid,
    pub status: String,
    pub message: String,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<JoinRequest, String> {
        let status = JoinRequestStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown join request status: {}", self.status))?;

        Ok(JoinRequest {
            id: self.id,
            project_id: self.project_id,
            volunteer_id: self.volunteer_id,
            status,
            message: self.message,
            decided_by: self.decided_by,
            decided_at: self.decided_at.map(|t| t.to_utc()),
            created_at: self.created_at.to_utc(),
        })
    }
}
