use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

use super::jwt_config::JwtConfig;

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: Uuid,
    exp: i64,
    token_type: String, // "access" or "refresh"
    role: String,
}

pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        role: Role,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(expiry_seconds);
        let claims = JwtClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            token_type: token_type.to_string(),
            role: role.as_str().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.generate_token(user_id, role, "access", self.config.access_token_expiry)
    }

    fn generate_refresh_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.generate_token(user_id, role, "refresh", self.config.refresh_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // enforced manually below

        let decoded = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::TokenExpired);
        }

        let role = Role::parse(&decoded.claims.role).ok_or(TokenError::InvalidToken)?;

        Ok(TokenClaims {
            sub: decoded.claims.sub,
            exp: decoded.claims.exp,
            token_type: decoded.claims.token_type,
            role,
        })
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != "refresh" {
            return Err(TokenError::InvalidTokenType);
        }

        self.generate_access_token(claims.sub, claims.role)
    }
}
