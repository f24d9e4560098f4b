use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::User;
use crate::user::application::ports::outgoing::{
    AdminUserRepository, AdminUserRepositoryError, UserListFilter, UserPage,
};

#[derive(Clone, Debug)]
pub struct AdminUserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminUserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn into_domain(model: UserModel) -> Result<User, AdminUserRepositoryError> {
        model
            .into_domain()
            .map_err(AdminUserRepositoryError::DatabaseError)
    }

    async fn load(&self, user_id: Uuid) -> Result<UserModel, AdminUserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminUserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AdminUserRepositoryError::NotFound)
    }
}

#[async_trait]
impl AdminUserRepository for AdminUserRepositoryPostgres {
    async fn list_users(
        &self,
        filter: UserListFilter,
        page: u64,
        limit: u64,
    ) -> Result<UserPage, AdminUserRepositoryError> {
        let mut query = UserEntity::find();

        if let Some(role) = filter.role {
            query = query.filter(Column::Role.eq(role.as_str()));
        }
        if let Some(is_approved) = filter.is_approved {
            query = query.filter(Column::IsApproved.eq(is_approved));
        }
        if let Some(search) = filter.search {
            let pattern = format!("%{}%", search.replace('%', "\\%").replace('_', "\\_"));
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Firstname).ilike(pattern.clone()))
                    .add(Expr::col(Column::Lastname).ilike(pattern.clone()))
                    .add(Expr::col(Column::Email).ilike(pattern.clone()))
                    .add(Expr::col(Column::Username).ilike(pattern)),
            );
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| AdminUserRepositoryError::DatabaseError(e.to_string()))?;

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| AdminUserRepositoryError::DatabaseError(e.to_string()))?;

        let users = models
            .into_iter()
            .map(Self::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserPage { users, total })
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<User, AdminUserRepositoryError> {
        let model = self.load(user_id).await?;
        Self::into_domain(model)
    }

    async fn set_approved(
        &self,
        user_id: Uuid,
        approved: bool,
    ) -> Result<User, AdminUserRepositoryError> {
        let model = self.load(user_id).await?;

        if model.is_approved == approved {
            return Self::into_domain(model);
        }

        let mut active: UserActiveModel = model.into();
        active.is_approved = Set(approved);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| AdminUserRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(updated)
    }

    async fn set_banned(
        &self,
        user_id: Uuid,
        banned: bool,
    ) -> Result<User, AdminUserRepositoryError> {
        let model = self.load(user_id).await?;

        if model.is_banned == banned {
            return Self::into_domain(model);
        }

        let mut active: UserActiveModel = model.into();
        active.is_banned = Set(banned);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| AdminUserRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(updated)
    }
}
