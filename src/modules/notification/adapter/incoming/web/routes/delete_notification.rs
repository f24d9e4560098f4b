use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::NotificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/notifications/{id}")]
pub async fn delete_notification_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let notification_id = path.into_inner();

    match data
        .delete_notification_use_case
        .execute(notification_id, user.user_id)
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({ "deleted": true })),

        Err(NotificationError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(NotificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error deleting notification");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::notification::application::ports::incoming::use_cases::DeleteNotificationUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockDelete;

    #[async_trait]
    impl DeleteNotificationUseCase for MockDelete {
        async fn execute(
            &self,
            _notification_id: Uuid,
            _user_id: Uuid,
        ) -> Result<(), NotificationError> {
            Ok(())
        }
    }

    struct MockDeleteNotFound;

    #[async_trait]
    impl DeleteNotificationUseCase for MockDeleteNotFound {
        async fn execute(
            &self,
            _notification_id: Uuid,
            _user_id: Uuid,
        ) -> Result<(), NotificationError> {
            Err(NotificationError::NotFound)
        }
    }

    #[actix_web::test]
    async fn delete_succeeds_for_owned_notification() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_notification(MockDelete)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(delete_notification_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/notifications/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["deleted"], true);
    }

    #[actix_web::test]
    async fn delete_of_unknown_notification_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_notification(MockDeleteNotFound)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(delete_notification_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/notifications/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
