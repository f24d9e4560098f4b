use actix_web::{put, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::NotificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/notifications/read-all")]
pub async fn mark_all_read_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.mark_all_read_use_case.execute(user.user_id).await {
        Ok(updated) => ApiResponse::success(serde_json::json!({ "updated": updated })),

        Err(NotificationError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(NotificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error marking notifications read");
            ApiResponse::internal_error()
        }
    }
}
