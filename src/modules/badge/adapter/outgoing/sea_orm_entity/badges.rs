use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::badge::application::domain::entities::{Badge, BadgeCriteria, BadgeTier};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "badges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: String,
    pub criteria_type: String,
    pub criteria_value: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<Badge, String> {
        let tier =
            BadgeTier::parse(&self.tier).ok_or_else(|| format!("unknown badge tier: {}", self.tier))?;
        let criteria_type = BadgeCriteria::parse(&self.criteria_type)
            .ok_or_else(|| format!("unknown badge criteria: {}", self.criteria_type))?;

        Ok(Badge {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            tier,
            criteria_type,
            criteria_value: self.criteria_value,
            is_active: self.is_active,
            created_at: self.created_at.to_utc(),
        })
    }
}
