use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Any authenticated account, regardless of role.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    role: claims.role,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Admin or mobilizer. Reviews join requests and hour submissions.
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl FromRequest for StaffUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => {
                if !user.role.is_staff() {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Staff access required",
                    ))));
                }

                ready(Ok(StaffUser {
                    user_id: user.user_id,
                    role: user.role,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// Admin only. Account approval, bans, and project management.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => {
                if user.role != Role::Admin {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Admin access required",
                    ))));
                }

                ready(Ok(AdminUser {
                    user_id: user.user_id,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// Volunteer only. Files join requests and logs hours.
#[derive(Debug, Clone)]
pub struct VolunteerUser {
    pub user_id: Uuid,
}

impl FromRequest for VolunteerUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => {
                if user.role != Role::Volunteer {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Volunteer access required",
                    ))));
                }

                ready(Ok(VolunteerUser {
                    user_id: user.user_id,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// `Authorization: Bearer` wins; the httpOnly `token` cookie set at login is
/// the fallback for browser clients.
fn extract_token(req: &HttpRequest) -> Option<String> {
    let header_token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.to_string());

    header_token.or_else(|| req.cookie("token").map(|c| c.value().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::test_token_provider;
    use actix_web::{cookie::Cookie, get, test, App, Responder};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        ApiResponse::success(serde_json::json!({ "user_id": user.user_id }))
    }

    #[get("/volunteers-only")]
    async fn volunteers_only(user: VolunteerUser) -> impl Responder {
        ApiResponse::success(serde_json::json!({ "user_id": user.user_id }))
    }

    #[actix_web::test]
    async fn a_token_cookie_authenticates_without_a_bearer_header() {
        let user_id = Uuid::new_v4();

        let app = test::init_service(
            App::new()
                .app_data(test_token_provider(user_id, Role::Volunteer))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new("token", "cookie-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user_id"], user_id.to_string());
    }

    #[actix_web::test]
    async fn no_header_and_no_cookie_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn staff_roles_fail_the_volunteer_guard() {
        let app = test::init_service(
            App::new()
                .app_data(test_token_provider(Uuid::new_v4(), Role::Mobilizer))
                .service(volunteers_only),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/volunteers-only")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
