use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{Column, Entity as UserEntity};
use crate::auth::application::domain::entities::Role;
use crate::user::application::ports::outgoing::{UserDirectory, UserDirectoryError};

#[derive(Clone, Debug)]
pub struct UserDirectoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserDirectoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryPostgres {
    async fn approved_volunteer_ids(&self) -> Result<Vec<Uuid>, UserDirectoryError> {
        UserEntity::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Role.eq(Role::Volunteer.as_str()))
            .filter(Column::IsApproved.eq(true))
            .filter(Column::IsBanned.eq(false))
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(|e| UserDirectoryError::DatabaseError(e.to_string()))
    }

    async fn staff_ids(&self) -> Result<Vec<Uuid>, UserDirectoryError> {
        UserEntity::find()
            .select_only()
            .column(Column::Id)
            .filter(
                Column::Role.is_in([Role::Admin.as_str(), Role::Mobilizer.as_str()]),
            )
            .filter(Column::IsBanned.eq(false))
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(|e| UserDirectoryError::DatabaseError(e.to_string()))
    }
}
