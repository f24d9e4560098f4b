pub mod app_state_builder;
pub mod stubs;

use std::sync::Arc;

use actix_web::web;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, PublicUser, Rank, Role};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Token provider that accepts any bearer token and resolves it to a fixed
/// identity. Lets handler tests pick the caller's id and role up front.
struct FixedTokenProvider {
    user_id: Uuid,
    role: Role,
}

impl TokenProvider for FixedTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok("test-access-token".to_string())
    }

    fn generate_refresh_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok("test-refresh-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: Utc::now().timestamp() + 3600,
            token_type: "access".to_string(),
            role: self.role,
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        Ok("test-access-token".to_string())
    }
}

pub fn test_token_provider(
    user_id: Uuid,
    role: Role,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(FixedTokenProvider { user_id, role });
    web::Data::new(provider)
}

pub fn sample_public_user() -> PublicUser {
    let now = Utc::now();
    PublicUser {
        id: Uuid::new_v4(),
        firstname: "Amina".to_string(),
        lastname: "Okello".to_string(),
        username: "amina_o".to_string(),
        email: "amina@example.com".to_string(),
        phone: "+256700000001".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1998, 4, 12).unwrap(),
        gender: Gender::Female,
        address: "Kampala".to_string(),
        bio: "Community volunteer".to_string(),
        country: "Uganda".to_string(),
        skills: vec!["teaching".to_string()],
        other_skills: String::new(),
        interests: vec!["education".to_string()],
        availability: vec!["weekends".to_string()],
        role: Role::Volunteer,
        is_approved: true,
        is_banned: false,
        profile_picture: String::new(),
        email_verified: true,
        total_hours: 0.0,
        rank: Rank::Starter,
        created_at: now,
        updated_at: now,
    }
}
