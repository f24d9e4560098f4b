use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::AdminUserError;
use crate::AppState;

#[put("/api/user/approve/{id}")]
pub async fn approve_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.approve_user_use_case.execute(user_id).await {
        Ok(profile) => {
            info!(user_id = %user_id, admin_id = %admin.user_id, "User approved");
            ApiResponse::success(profile)
        }

        Err(AdminUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(AdminUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error approving user");
            ApiResponse::internal_error()
        }
    }
}
