use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::badge::application::domain::entities::Badge;
use crate::badge::application::ports::outgoing::{BadgeRepository, BadgeRepositoryError};

use super::sea_orm_entity::badges::{Column, Entity as BadgeEntity, Model as BadgeModel};

#[derive(Clone, Debug)]
pub struct BadgeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BadgeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn into_domain(model: BadgeModel) -> Result<Badge, BadgeRepositoryError> {
        model
            .into_domain()
            .map_err(BadgeRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl BadgeRepository for BadgeRepositoryPostgres {
    async fn list_active(&self) -> Result<Vec<Badge>, BadgeRepositoryError> {
        let models = BadgeEntity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::CriteriaValue)
            .all(&*self.db)
            .await
            .map_err(|e| BadgeRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::into_domain).collect()
    }
}
