use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsQuery, NotificationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListNotificationsParams {
    page: Option<u64>,
    limit: Option<u64>,
    read: Option<bool>,
}

#[get("/api/notifications")]
pub async fn list_notifications_handler(
    user: AuthenticatedUser,
    params: web::Query<ListNotificationsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListNotificationsQuery::new(params.page, params.limit, params.read);

    match data
        .list_notifications_use_case
        .execute(user.user_id, query)
        .await
    {
        Ok(response) => ApiResponse::success(response),

        Err(NotificationError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(NotificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing notifications");
            ApiResponse::internal_error()
        }
    }
}
