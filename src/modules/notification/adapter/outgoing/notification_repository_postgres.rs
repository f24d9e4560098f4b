use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::notification::application::domain::entities::Notification;
use crate::notification::application::ports::outgoing::{
    NewNotification, NotificationPage, NotificationRepository, NotificationRepositoryError,
    NotificationWriteError, NotificationWriter,
};

use super::sea_orm_entity::notifications::{
    ActiveModel as NotificationActiveModel, Column, Entity as NotificationEntity,
    Model as NotificationModel,
};

#[derive(Clone, Debug)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn into_domain(model: NotificationModel) -> Result<Notification, NotificationRepositoryError> {
        model
            .into_domain()
            .map_err(NotificationRepositoryError::DatabaseError)
    }

    fn active_model(notification: NewNotification) -> NotificationActiveModel {
        NotificationActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(notification.user_id),
            kind: Set(notification.kind.as_str().to_string()),
            title: Set(notification.title),
            message: Set(notification.message),
            read: Set(false),
            link: Set(notification.link),
            metadata: Set(notification.metadata),
            created_at: Set(Utc::now().into()),
        }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        read: Option<bool>,
        page: u64,
        limit: u64,
    ) -> Result<NotificationPage, NotificationRepositoryError> {
        let mut query = NotificationEntity::find().filter(Column::UserId.eq(user_id));
        if let Some(read) = read {
            query = query.filter(Column::Read.eq(read));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        let unread = NotificationEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Read.eq(false))
            .count(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        let notifications = models
            .into_iter()
            .map(Self::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NotificationPage {
            notifications,
            total,
            unread,
        })
    }

    async fn unread_count(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError> {
        NotificationEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Read.eq(false))
            .count(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))
    }

    async fn mark_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, NotificationRepositoryError> {
        // Ownership is folded into the lookup so a foreign id reads as absent.
        let model = NotificationEntity::find_by_id(notification_id)
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NotificationRepositoryError::NotFound)?;

        let mut active: NotificationActiveModel = model.into();
        active.read = Set(true);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(updated)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError> {
        let result = NotificationEntity::update_many()
            .col_expr(Column::Read, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Read.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), NotificationRepositoryError> {
        let result = NotificationEntity::delete_many()
            .filter(Column::Id.eq(notification_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(NotificationRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationWriter for NotificationRepositoryPostgres {
    async fn notify(&self, notification: NewNotification) -> Result<(), NotificationWriteError> {
        NotificationEntity::insert(Self::active_model(notification))
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| NotificationWriteError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn notify_many(
        &self,
        notifications: Vec<NewNotification>,
    ) -> Result<(), NotificationWriteError> {
        if notifications.is_empty() {
            return Ok(());
        }

        let models = notifications.into_iter().map(Self::active_model);

        NotificationEntity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| NotificationWriteError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
