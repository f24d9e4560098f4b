use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{AdminUserError, ListUsersQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    page: Option<u64>,
    limit: Option<u64>,
    role: Option<String>,
    is_approved: Option<bool>,
    search: Option<String>,
}

#[get("/api/user/all")]
pub async fn list_users_handler(
    _admin: AdminUser,
    params: web::Query<ListUsersParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let role = match params.role.as_deref() {
        Some(value) => match Role::parse(value) {
            Some(role) => Some(role),
            None => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    &format!("Unknown role: {value}"),
                );
            }
        },
        None => None,
    };

    let query = ListUsersQuery::new(
        params.page,
        params.limit,
        role,
        params.is_approved,
        params.search,
    );

    match data.list_users_use_case.execute(query).await {
        Ok(response) => ApiResponse::success(response),

        Err(AdminUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(AdminUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing users");
            ApiResponse::internal_error()
        }
    }
}
