use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub token_type: String,
    pub role: Role,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid or malformed token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Token encoding failed: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError>;

    fn generate_refresh_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError>;
}
