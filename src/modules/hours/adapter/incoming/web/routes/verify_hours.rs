use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::hours::application::ports::incoming::use_cases::DecideHoursError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/hours/verify/{id}")]
pub async fn verify_hours_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data
        .verify_hours_use_case
        .execute(entry_id, staff.user_id)
        .await
    {
        Ok(entry) => {
            info!(entry_id = %entry.id, verifier_id = %staff.user_id, "Hours verified");
            ApiResponse::success(entry)
        }

        Err(DecideHoursError::NotFound) => {
            ApiResponse::not_found("HOURS_NOT_FOUND", "Hours entry not found")
        }

        Err(DecideHoursError::NotPending) => ApiResponse::bad_request(
            "NOT_PENDING",
            "This hours entry has already been decided",
        ),

        Err(DecideHoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error verifying hours");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
    use crate::hours::application::ports::incoming::use_cases::VerifyHoursUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    struct MockVerify;

    #[async_trait]
    impl VerifyHoursUseCase for MockVerify {
        async fn execute(
            &self,
            entry_id: Uuid,
            verifier_id: Uuid,
        ) -> Result<VolunteerHours, DecideHoursError> {
            Ok(VolunteerHours {
                id: entry_id,
                volunteer_id: Uuid::new_v4(),
                project_id: Uuid::new_v4(),
                hours: 5.0,
                description: String::new(),
                date_worked: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
                status: HoursStatus::Verified,
                verified_by: Some(verifier_id),
                verified_at: Some(Utc::now()),
                rejection_reason: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    struct MockVerifyNotPending;

    #[async_trait]
    impl VerifyHoursUseCase for MockVerifyNotPending {
        async fn execute(
            &self,
            _entry_id: Uuid,
            _verifier_id: Uuid,
        ) -> Result<VolunteerHours, DecideHoursError> {
            Err(DecideHoursError::NotPending)
        }
    }

    #[actix_web::test]
    async fn staff_verify_an_entry() {
        let staff_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_verify_hours(MockVerify)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(staff_id, Role::Admin))
                .service(verify_hours_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/hours/verify/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "verified");
        assert_eq!(body["data"]["verified_by"], staff_id.to_string());
    }

    #[actix_web::test]
    async fn an_already_decided_entry_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_verify_hours(MockVerifyNotPending)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Mobilizer))
                .service(verify_hours_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/hours/verify/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_PENDING");
    }

    #[actix_web::test]
    async fn volunteers_cannot_verify() {
        let app_state = TestAppStateBuilder::default()
            .with_verify_hours(MockVerify)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(verify_hours_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/hours/verify/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
