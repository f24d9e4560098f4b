use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Rank, Role, User};
use crate::auth::application::ports::outgoing::user_repository::{
    NewUserData, ProfileUpdateData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_duplicate_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        let is_duplicate = err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint");

        if is_duplicate {
            if err_str.contains("username") {
                return UserRepositoryError::DuplicateUsername;
            }
            if err_str.contains("phone") {
                return UserRepositoryError::DuplicatePhone;
            }
            return UserRepositoryError::DuplicateEmail;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn into_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        model.into_domain().map_err(UserRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: NewUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            firstname: Set(data.firstname),
            lastname: Set(data.lastname),
            username: Set(data.username),
            email: Set(data.email),
            phone: Set(data.phone),
            password_hash: Set(data.password_hash),
            date_of_birth: Set(data.date_of_birth),
            gender: Set(data.gender.as_str().to_string()),
            address: Set(data.address),
            bio: Set(data.bio),
            country: Set(data.country),
            skills: Set(serde_json::json!(data.skills)),
            other_skills: Set(data.other_skills),
            interests: Set(serde_json::json!(data.interests)),
            availability: Set(serde_json::json!(data.availability)),
            role: Set(Role::Volunteer.as_str().to_string()),
            is_approved: Set(false),
            is_banned: Set(false),
            profile_picture: Set(String::new()),
            email_verified: Set(false),
            total_hours: Set(0.0),
            rank: Set(Rank::Starter.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_duplicate_error)?;

        Self::into_domain(inserted)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::into_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::into_domain).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::into_domain).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(Column::Phone.eq(phone))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::into_domain).transpose()
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: ProfileUpdateData,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();

        if let Some(firstname) = data.firstname {
            active_user.firstname = Set(firstname);
        }
        if let Some(lastname) = data.lastname {
            active_user.lastname = Set(lastname);
        }
        if let Some(email) = data.email {
            active_user.email = Set(email);
        }
        if let Some(phone) = data.phone {
            active_user.phone = Set(phone);
        }
        if let Some(bio) = data.bio {
            active_user.bio = Set(bio);
        }
        if let Some(address) = data.address {
            active_user.address = Set(address);
        }
        if let Some(profile_picture) = data.profile_picture {
            active_user.profile_picture = Set(profile_picture);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_duplicate_error)?;

        Self::into_domain(updated)
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(password_hash.to_string());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
