use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

#[put("/api/user/password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ChangePasswordCommand::new(dto.current_password, dto.new_password) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .change_password_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::success(serde_json::json!({ "message": "Password updated" }))
        }

        Err(ChangePasswordError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::IncorrectCurrentPassword) => {
            warn!(user_id = %user.user_id, "Password change: wrong current password");
            ApiResponse::unauthorized("INCORRECT_PASSWORD", "Current password is incorrect")
        }

        Err(ChangePasswordError::HashingError(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(ChangePasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error changing password");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::ports::incoming::use_cases::ChangePasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockChangeSuccess;

    #[async_trait]
    impl ChangePasswordUseCase for MockChangeSuccess {
        async fn execute(
            &self,
            _user_id: Uuid,
            _command: ChangePasswordCommand,
        ) -> Result<(), ChangePasswordError> {
            Ok(())
        }
    }

    struct MockChangeWrongPassword;

    #[async_trait]
    impl ChangePasswordUseCase for MockChangeWrongPassword {
        async fn execute(
            &self,
            _user_id: Uuid,
            _command: ChangePasswordCommand,
        ) -> Result<(), ChangePasswordError> {
            Err(ChangePasswordError::IncorrectCurrentPassword)
        }
    }

    #[actix_web::test]
    async fn change_password_succeeds() {
        let app_state = TestAppStateBuilder::default()
            .with_change_password(MockChangeSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/user/password")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "current_password": "old-secret",
                "new_password": "new-secret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn change_password_wrong_current_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_change_password(MockChangeWrongPassword)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/user/password")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "current_password": "wrong",
                "new_password": "new-secret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INCORRECT_PASSWORD");
    }

    #[actix_web::test]
    async fn change_password_short_new_password_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_change_password(MockChangeSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/user/password")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "current_password": "old-secret",
                "new_password": "12345"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
