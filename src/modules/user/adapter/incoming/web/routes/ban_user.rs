use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::AdminUserError;
use crate::AppState;

#[put("/api/user/ban/{id}")]
pub async fn ban_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.ban_user_use_case.execute(user_id).await {
        Ok(profile) => {
            info!(user_id = %user_id, admin_id = %admin.user_id, "User banned");
            ApiResponse::success(profile)
        }

        Err(AdminUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(AdminUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error banning user");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/user/unban/{id}")]
pub async fn unban_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.unban_user_use_case.execute(user_id).await {
        Ok(profile) => {
            info!(user_id = %user_id, admin_id = %admin.user_id, "User unbanned");
            ApiResponse::success(profile)
        }

        Err(AdminUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(AdminUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error unbanning user");
            ApiResponse::internal_error()
        }
    }
}
