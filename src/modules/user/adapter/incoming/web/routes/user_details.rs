use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::AdminUserError;
use crate::AppState;

#[get("/api/user/details/{id}")]
pub async fn user_details_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.get_user_details_use_case.execute(user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(AdminUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(AdminUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error fetching user details");
            ApiResponse::internal_error()
        }
    }
}
