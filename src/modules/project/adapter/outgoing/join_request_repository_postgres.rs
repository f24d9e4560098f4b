use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::project::application::domain::entities::{JoinRequest, JoinRequestStatus};
use crate::project::application::ports::outgoing::{
    JoinRequestRepository, JoinRequestRepositoryError, NewJoinRequest,
};

use super::sea_orm_entity::join_requests::{
    ActiveModel as RequestActiveModel, Column, Entity as RequestEntity, Model as RequestModel,
};

#[derive(Clone, Debug)]
pub struct JoinRequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JoinRequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn into_domain(model: RequestModel) -> Result<JoinRequest, JoinRequestRepositoryError> {
        model
            .into_domain()
            .map_err(JoinRequestRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl JoinRequestRepository for JoinRequestRepositoryPostgres {
    async fn create(
        &self,
        data: NewJoinRequest,
    ) -> Result<JoinRequest, JoinRequestRepositoryError> {
        let active = RequestActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(data.project_id),
            volunteer_id: Set(data.volunteer_id),
            status: Set(JoinRequestStatus::Pending.as_str().to_string()),
            message: Set(data.message),
            decided_by: Set(None),
            decided_at: Set(None),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| JoinRequestRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(inserted)
    }

    async fn find_pending(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<Option<JoinRequest>, JoinRequestRepositoryError> {
        let model = RequestEntity::find()
            .filter(Column::ProjectId.eq(project_id))
            .filter(Column::VolunteerId.eq(volunteer_id))
            .filter(Column::Status.eq(JoinRequestStatus::Pending.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| JoinRequestRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::into_domain).transpose()
    }

    async fn find_by_id(
        &self,
        request_id: Uuid,
    ) -> Result<JoinRequest, JoinRequestRepositoryError> {
        let model = RequestEntity::find_by_id(request_id)
            .one(&*self.db)
            .await
            .map_err(|e| JoinRequestRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(JoinRequestRepositoryError::NotFound)?;

        Self::into_domain(model)
    }

    async fn list_pending(&self) -> Result<Vec<JoinRequest>, JoinRequestRepositoryError> {
        let models = RequestEntity::find()
            .filter(Column::Status.eq(JoinRequestStatus::Pending.as_str()))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| JoinRequestRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::into_domain).collect()
    }

    async fn decide(
        &self,
        request_id: Uuid,
        status: JoinRequestStatus,
        decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestRepositoryError> {
        let model = RequestEntity::find_by_id(request_id)
            .one(&*self.db)
            .await
            .map_err(|e| JoinRequestRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(JoinRequestRepositoryError::NotFound)?;

        let mut active: RequestActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.decided_by = Set(Some(decided_by));
        active.decided_at = Set(Some(Utc::now().into()));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| JoinRequestRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(updated)
    }
}
