use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::VolunteerUser;
use crate::hours::application::ports::incoming::use_cases::{
    LogHoursCommand, LogHoursError, LogHoursInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LogHoursDto {
    pub project_id: Uuid,
    pub hours: f64,
    #[serde(default)]
    pub description: String,
    pub date_worked: NaiveDate,
}

#[post("/api/hours/log")]
pub async fn log_hours_handler(
    user: VolunteerUser,
    dto: web::Json<LogHoursDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = dto.into_inner();

    let command = match LogHoursCommand::new(LogHoursInput {
        project_id: dto.project_id,
        hours: dto.hours,
        description: dto.description,
        date_worked: dto.date_worked,
    }) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.log_hours_use_case.execute(user.user_id, command).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, volunteer_id = %user.user_id, "Hours logged");
            ApiResponse::created(entry)
        }

        Err(LogHoursError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(LogHoursError::NotProjectMember) => ApiResponse::forbidden(
            "NOT_PROJECT_MEMBER",
            "You can only log hours for projects you belong to",
        ),

        Err(LogHoursError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error logging hours");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
    use crate::hours::application::ports::incoming::use_cases::LogHoursUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockLog;

    #[async_trait]
    impl LogHoursUseCase for MockLog {
        async fn execute(
            &self,
            volunteer_id: Uuid,
            command: LogHoursCommand,
        ) -> Result<VolunteerHours, LogHoursError> {
            Ok(VolunteerHours {
                id: Uuid::new_v4(),
                volunteer_id,
                project_id: command.project_id(),
                hours: command.hours(),
                description: command.description().to_string(),
                date_worked: command.date_worked(),
                status: HoursStatus::Pending,
                verified_by: None,
                verified_at: None,
                rejection_reason: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    struct MockLogNotMember;

    #[async_trait]
    impl LogHoursUseCase for MockLogNotMember {
        async fn execute(
            &self,
            _volunteer_id: Uuid,
            _command: LogHoursCommand,
        ) -> Result<VolunteerHours, LogHoursError> {
            Err(LogHoursError::NotProjectMember)
        }
    }

    #[actix_web::test]
    async fn a_volunteer_logs_hours() {
        let app_state = TestAppStateBuilder::default().with_log_hours(MockLog).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(log_hours_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/hours/log")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "project_id": Uuid::new_v4(),
                "hours": 3.5,
                "description": "Sorted donated books",
                "date_worked": "2025-08-02"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["hours"], 3.5);
    }

    #[actix_web::test]
    async fn staff_cannot_log_hours() {
        let app_state = TestAppStateBuilder::default().with_log_hours(MockLog).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Mobilizer))
                .service(log_hours_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/hours/log")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "project_id": Uuid::new_v4(),
                "hours": 3.5,
                "date_worked": "2025-08-02"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn too_few_hours_is_400() {
        let app_state = TestAppStateBuilder::default().with_log_hours(MockLog).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(log_hours_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/hours/log")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "project_id": Uuid::new_v4(),
                "hours": 0.25,
                "date_worked": "2025-08-02"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn a_non_member_gets_403() {
        let app_state = TestAppStateBuilder::default()
            .with_log_hours(MockLogNotMember)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(Uuid::new_v4(), Role::Volunteer))
                .service(log_hours_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/hours/log")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({
                "project_id": Uuid::new_v4(),
                "hours": 2.0,
                "date_worked": "2025-08-02"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_PROJECT_MEMBER");
    }
}
