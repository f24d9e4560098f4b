use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::notification::application::domain::entities::{Notification, NotificationKind};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub link: String,
    pub metadata: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<Notification, String> {
        let kind = NotificationKind::parse(&self.kind)
            .ok_or_else(|| format!("unknown notification kind: {}", self.kind))?;

        Ok(Notification {
            id: self.id,
            user_id: self.user_id,
            kind,
            title: self.title,
            message: self.message,
            read: self.read,
            link: self.link,
            metadata: self.metadata,
            created_at: self.created_at.to_utc(),
        })
    }
}
