use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::project::application::domain::entities::{Project, ProjectStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub location: String,
    pub community: String,
    pub beneficiaries_count: i32,
    pub requirements: Json,
    pub needed_volunteers: Option<i32>,
    pub created_by: Uuid,
    pub edited_by: Option<Uuid>,
    pub edited_at: Option<DateTimeWithTimeZone>,
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
    pub fn into_domain(self) -> Result<Project, String> {
        let status = ProjectStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown project status: {}", self.status))?;

        Ok(Project {
            id: self.id,
            title: self.title,
            description: self.description,
            status,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            community: self.community,
            beneficiaries_count: self.beneficiaries_count,
            requirements: serde_json::from_value(self.requirements).unwrap_or_default(),
            needed_volunteers: self.needed_volunteers,
            created_by: self.created_by,
            edited_by: self.edited_by,
            edited_at: self.edited_at.map(|t| t.to_utc()),
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        })
    }
}
