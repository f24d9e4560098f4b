use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(command).await {
        Ok(tokens) => {
            info!(user_id = %tokens.user.id, "User logged in");
            ApiResponse::success(tokens)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountBanned) => {
            warn!("Login refused: account banned");
            ApiResponse::forbidden("ACCOUNT_BANNED", "This account has been banned")
        }

        Err(LoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during login");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::{AuthTokens, LoginUserUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::sample_public_user;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLoginSuccess;

    #[async_trait]
    impl LoginUserUseCase for MockLoginSuccess {
        async fn execute(&self, _command: LoginCommand) -> Result<AuthTokens, LoginError> {
            Ok(AuthTokens {
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
                user: sample_public_user(),
            })
        }
    }

    struct MockLoginFailure(LoginError);

    #[async_trait]
    impl LoginUserUseCase for MockLoginFailure {
        async fn execute(&self, _command: LoginCommand) -> Result<AuthTokens, LoginError> {
            Err(self.0.clone())
        }
    }

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "email": "amina@example.com",
            "password": "secret123"
        })
    }

    #[actix_web::test]
    async fn login_returns_tokens_and_profile() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "access");
        assert_eq!(body["data"]["refresh_token"], "refresh");
        assert!(body["data"]["user"]["id"].is_string());
    }

    #[actix_web::test]
    async fn login_invalid_credentials_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginFailure(LoginError::InvalidCredentials))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn login_banned_account_is_403() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginFailure(LoginError::AccountBanned))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCOUNT_BANNED");
    }

    #[actix_web::test]
    async fn login_validation_error_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "email": "notanemail", "password": "pw" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn login_repository_error_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginFailure(LoginError::RepositoryError(
                "pool exhausted".to_string(),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
