use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::NotificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/notifications/{id}")]
pub async fn mark_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let notification_id = path.into_inner();

    match data
        .mark_notification_read_use_case
        .execute(notification_id, user.user_id)
        .await
    {
        Ok(notification) => ApiResponse::success(notification),

        Err(NotificationError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(NotificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error marking notification read");
            ApiResponse::internal_error()
        }
    }
}
