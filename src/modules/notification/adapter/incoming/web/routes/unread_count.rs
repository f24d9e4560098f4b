use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::NotificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/notifications/unread-count")]
pub async fn unread_count_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.unread_count_use_case.execute(user.user_id).await {
        Ok(count) => ApiResponse::success(serde_json::json!({ "unread_count": count })),

        Err(NotificationError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(NotificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error counting unread notifications");
            ApiResponse::internal_error()
        }
    }
}
