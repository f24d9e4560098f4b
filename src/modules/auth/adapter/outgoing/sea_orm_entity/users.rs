use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, Rank, Role, User};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub password_hash: String,
    pub date_of_birth: Date,
    pub gender: String,
    pub address: String,
    pub bio: String,
    pub country: String,
    pub skills: Json,
    pub other_skills: String,
    pub interests: Json,
    pub availability: Json,
    pub role: String,
    pub is_approved: bool,
    pub is_banned: bool,
    pub profile_picture: String,
    pub email_verified: bool,
    #[sea_orm(column_type = "Double")]
    pub total_hours: f64,
    pub rank: String,
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

fn string_list(value: Json) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl Model {
    /// Map a row to the domain entity. Fails on enum columns holding values
    /// the application does not know about.
    pub fn into_domain(self) -> Result<User, String> {
        let role = Role::parse(&self.role).ok_or_else(|| format!("unknown role: {}", self.role))?;
        let rank = Rank::parse(&self.rank).ok_or_else(|| format!("unknown rank: {}", self.rank))?;
        let gender = Gender::parse(&self.gender)
            .ok_or_else(|| format!("unknown gender: {}", self.gender))?;

        Ok(User {
            id: self.id,
            firstname: self.firstname,
            lastname: self.lastname,
            username: self.username,
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            date_of_birth: self.date_of_birth,
            gender,
            address: self.address,
            bio: self.bio,
            country: self.country,
            skills: string_list(self.skills),
            other_skills: self.other_skills,
            interests: string_list(self.interests),
            availability: string_list(self.availability),
            role,
            is_approved: self.is_approved,
            is_banned: self.is_banned,
            profile_picture: self.profile_picture,
            email_verified: self.email_verified,
            total_hours: self.total_hours,
            rank,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        })
    }
}
