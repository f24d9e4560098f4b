use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenUseCase, RefreshedToken,
};
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

pub struct RefreshTokenService {
    token_provider: Arc<dyn TokenProvider>,
}

impl RefreshTokenService {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshedToken, RefreshTokenError> {
        match self.token_provider.refresh_access_token(refresh_token) {
            Ok(access_token) => Ok(RefreshedToken { access_token }),
            Err(TokenError::EncodingError(e)) => Err(RefreshTokenError::TokenGenerationFailed(e)),
            Err(_) => Err(RefreshTokenError::InvalidToken),
        }
    }
}
