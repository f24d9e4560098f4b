pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::badge;
pub use modules::email;
pub use modules::hours;
pub use modules::notification;
pub use modules::project;
pub use modules::user;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::UserRepositoryPostgres;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, FetchProfileUseCase, LoginUserUseCase, RefreshTokenUseCase,
    RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    ChangePasswordService, FetchProfileService, LoginUserService, RefreshTokenService,
    RegisterUserService, UpdateProfileService,
};

use crate::badge::adapter::outgoing::BadgeRepositoryPostgres;
use crate::badge::application::ports::incoming::use_cases::ListBadgesUseCase;
use crate::badge::application::services::ListBadgesService;

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::UserEmailNotifier;
use crate::email::application::services::UserEmailService;

use crate::hours::adapter::outgoing::{HoursRepositoryPostgres, VolunteerLedgerPostgres};
use crate::hours::application::ports::incoming::use_cases::{
    HoursStatsUseCase, LogHoursUseCase, MyHoursUseCase, PendingHoursUseCase, ProjectHoursUseCase,
    RejectHoursUseCase, VerifyHoursUseCase,
};
use crate::hours::application::ports::outgoing::VolunteerLedger;
use crate::hours::application::services::{
    HoursStatsService, LogHoursService, MyHoursService, PendingHoursService, ProjectHoursService,
    RejectHoursService, VerifyHoursService,
};

use crate::notification::adapter::outgoing::NotificationRepositoryPostgres;
use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationUseCase, ListNotificationsUseCase, MarkAllReadUseCase,
    MarkNotificationReadUseCase, UnreadCountUseCase,
};
use crate::notification::application::ports::outgoing::NotificationWriter;
use crate::notification::application::services::{
    DeleteNotificationService, ListNotificationsService, MarkAllReadService, MarkReadService,
    UnreadCountService,
};

use crate::project::adapter::outgoing::{JoinRequestRepositoryPostgres, ProjectRepositoryPostgres};
use crate::project::application::ports::incoming::use_cases::{
    ApproveJoinRequestUseCase, CreateProjectUseCase, GetProjectUseCase, ListPendingRequestsUseCase,
    ListProjectsUseCase, RejectJoinRequestUseCase, RequestToJoinUseCase, UpdateProjectUseCase,
};
use crate::project::application::services::{
    CreateProjectService, DecideJoinRequestService, GetProjectService, JoinProjectService,
    ListPendingRequestsService, ListProjectsService, UpdateProjectService,
};

use crate::user::adapter::outgoing::{AdminUserRepositoryPostgres, UserDirectoryPostgres};
use crate::user::application::ports::incoming::use_cases::{
    ApproveUserUseCase, BanUserUseCase, GetUserDetailsUseCase, ListUsersUseCase, UnbanUserUseCase,
};
use crate::user::application::ports::outgoing::UserDirectory;
use crate::user::application::services::{
    ApproveUserService, GetUserDetailsService, ListUsersService, ManageBanService,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn RegisterUserUseCase>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase>,
    pub refresh_token_use_case: Arc<dyn RefreshTokenUseCase>,
    pub fetch_profile_use_case: Arc<dyn FetchProfileUseCase>,
    pub update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
    pub change_password_use_case: Arc<dyn ChangePasswordUseCase>,
    pub list_users_use_case: Arc<dyn ListUsersUseCase>,
    pub get_user_details_use_case: Arc<dyn GetUserDetailsUseCase>,
    pub approve_user_use_case: Arc<dyn ApproveUserUseCase>,
    pub ban_user_use_case: Arc<dyn BanUserUseCase>,
    pub unban_user_use_case: Arc<dyn UnbanUserUseCase>,
    pub create_project_use_case: Arc<dyn CreateProjectUseCase>,
    pub list_projects_use_case: Arc<dyn ListProjectsUseCase>,
    pub get_project_use_case: Arc<dyn GetProjectUseCase>,
    pub update_project_use_case: Arc<dyn UpdateProjectUseCase>,
    pub request_to_join_use_case: Arc<dyn RequestToJoinUseCase>,
    pub list_pending_requests_use_case: Arc<dyn ListPendingRequestsUseCase>,
    pub approve_join_request_use_case: Arc<dyn ApproveJoinRequestUseCase>,
    pub reject_join_request_use_case: Arc<dyn RejectJoinRequestUseCase>,
    pub log_hours_use_case: Arc<dyn LogHoursUseCase>,
    pub my_hours_use_case: Arc<dyn MyHoursUseCase>,
    pub project_hours_use_case: Arc<dyn ProjectHoursUseCase>,
    pub pending_hours_use_case: Arc<dyn PendingHoursUseCase>,
    pub verify_hours_use_case: Arc<dyn VerifyHoursUseCase>,
    pub reject_hours_use_case: Arc<dyn RejectHoursUseCase>,
    pub hours_stats_use_case: Arc<dyn HoursStatsUseCase>,
    pub list_notifications_use_case: Arc<dyn ListNotificationsUseCase>,
    pub unread_count_use_case: Arc<dyn UnreadCountUseCase>,
    pub mark_notification_read_use_case: Arc<dyn MarkNotificationReadUseCase>,
    pub mark_all_read_use_case: Arc<dyn MarkAllReadUseCase>,
    pub delete_notification_use_case: Arc<dyn DeleteNotificationUseCase>,
    pub list_badges_use_case: Arc<dyn ListBadgesUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Shared outgoing adapters
    let jwt_service = Arc::new(JwtService::new(JwtConfig::from_env()));
    let token_provider: Arc<dyn TokenProvider> = jwt_service.clone();
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher);
    let email_notifier: Arc<dyn UserEmailNotifier> =
        Arc::new(UserEmailService::new(Arc::new(smtp_sender)));

    let notification_repo = NotificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let notification_writer: Arc<dyn NotificationWriter> = Arc::new(notification_repo.clone());
    let directory: Arc<dyn UserDirectory> =
        Arc::new(UserDirectoryPostgres::new(Arc::clone(&db_arc)));

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let register_user_use_case = RegisterUserService::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&email_notifier),
    );
    let login_user_use_case = LoginUserService::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case = RefreshTokenService::new(Arc::clone(&token_provider));
    let fetch_profile_use_case = FetchProfileService::new(user_repo.clone());
    let update_profile_use_case = UpdateProfileService::new(user_repo.clone());
    let change_password_use_case =
        ChangePasswordService::new(user_repo, Arc::clone(&password_hasher));

    // User administration
    let admin_user_repo = AdminUserRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_users_use_case = ListUsersService::new(admin_user_repo.clone());
    let get_user_details_use_case = GetUserDetailsService::new(admin_user_repo.clone());
    let approve_user_use_case = ApproveUserService::new(
        admin_user_repo.clone(),
        Arc::clone(&notification_writer),
        Arc::clone(&email_notifier),
    );
    let manage_ban_service = Arc::new(ManageBanService::new(admin_user_repo));

    // Projects and join requests
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let join_request_repo = JoinRequestRepositoryPostgres::new(Arc::clone(&db_arc));
    let create_project_use_case = CreateProjectService::new(
        project_repo.clone(),
        Arc::clone(&directory),
        Arc::clone(&notification_writer),
    );
    let list_projects_use_case = ListProjectsService::new(project_repo.clone());
    let get_project_use_case = GetProjectService::new(project_repo.clone());
    let update_project_use_case =
        UpdateProjectService::new(project_repo.clone(), Arc::clone(&notification_writer));
    let request_to_join_use_case = JoinProjectService::new(
        project_repo.clone(),
        join_request_repo.clone(),
        Arc::clone(&directory),
        Arc::clone(&notification_writer),
    );
    let list_pending_requests_use_case = ListPendingRequestsService::new(join_request_repo.clone());
    let decide_join_request_service = Arc::new(DecideJoinRequestService::new(
        project_repo.clone(),
        join_request_repo,
        Arc::clone(&notification_writer),
    ));

    // Volunteer hours
    let hours_repo = HoursRepositoryPostgres::new(Arc::clone(&db_arc));
    let volunteer_ledger: Arc<dyn VolunteerLedger> =
        Arc::new(VolunteerLedgerPostgres::new(Arc::clone(&db_arc)));
    let log_hours_use_case = LogHoursService::new(
        project_repo,
        hours_repo.clone(),
        Arc::clone(&directory),
        Arc::clone(&notification_writer),
    );
    let my_hours_use_case = MyHoursService::new(hours_repo.clone());
    let project_hours_use_case = ProjectHoursService::new(hours_repo.clone());
    let pending_hours_use_case = PendingHoursService::new(hours_repo.clone());
    let verify_hours_use_case = VerifyHoursService::new(
        hours_repo.clone(),
        Arc::clone(&volunteer_ledger),
        Arc::clone(&notification_writer),
    );
    let reject_hours_use_case =
        RejectHoursService::new(hours_repo.clone(), Arc::clone(&notification_writer));
    let hours_stats_use_case = HoursStatsService::new(hours_repo);

    // Notifications
    let list_notifications_use_case = ListNotificationsService::new(notification_repo.clone());
    let unread_count_use_case = UnreadCountService::new(notification_repo.clone());
    let mark_notification_read_use_case = MarkReadService::new(notification_repo.clone());
    let mark_all_read_use_case = MarkAllReadService::new(notification_repo.clone());
    let delete_notification_use_case = DeleteNotificationService::new(notification_repo);

    // Badges
    let list_badges_use_case =
        ListBadgesService::new(BadgeRepositoryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        change_password_use_case: Arc::new(change_password_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        get_user_details_use_case: Arc::new(get_user_details_use_case),
        approve_user_use_case: Arc::new(approve_user_use_case),
        ban_user_use_case: manage_ban_service.clone(),
        unban_user_use_case: manage_ban_service,
        create_project_use_case: Arc::new(create_project_use_case),
        list_projects_use_case: Arc::new(list_projects_use_case),
        get_project_use_case: Arc::new(get_project_use_case),
        update_project_use_case: Arc::new(update_project_use_case),
        request_to_join_use_case: Arc::new(request_to_join_use_case),
        list_pending_requests_use_case: Arc::new(list_pending_requests_use_case),
        approve_join_request_use_case: decide_join_request_service.clone(),
        reject_join_request_use_case: decide_join_request_service,
        log_hours_use_case: Arc::new(log_hours_use_case),
        my_hours_use_case: Arc::new(my_hours_use_case),
        project_hours_use_case: Arc::new(project_hours_use_case),
        pending_hours_use_case: Arc::new(pending_hours_use_case),
        verify_hours_use_case: Arc::new(verify_hours_use_case),
        reject_hours_use_case: Arc::new(reject_hours_use_case),
        hours_stats_use_case: Arc::new(hours_stats_use_case),
        list_notifications_use_case: Arc::new(list_notifications_use_case),
        unread_count_use_case: Arc::new(unread_count_use_case),
        mark_notification_read_use_case: Arc::new(mark_notification_read_use_case),
        mark_all_read_use_case: Arc::new(mark_all_read_use_case),
        delete_notification_use_case: Arc::new(delete_notification_use_case),
        list_badges_use_case: Arc::new(list_badges_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile::me_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile::get_profile_handler);
    cfg.service(
        crate::auth::adapter::incoming::web::routes::update_profile::update_profile_handler,
    );
    cfg.service(
        crate::auth::adapter::incoming::web::routes::change_password::change_password_handler,
    );
    // User administration
    cfg.service(crate::user::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::user_details_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::approve_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::ban_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::unban_user_handler);
    // Projects: the literal /requests routes must come before /{id}
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::pending_requests_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::approve_request_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::reject_request_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::join_project_handler);
    // Volunteer hours
    cfg.service(crate::hours::adapter::incoming::web::routes::log_hours_handler);
    cfg.service(crate::hours::adapter::incoming::web::routes::my_hours_handler);
    cfg.service(crate::hours::adapter::incoming::web::routes::pending_hours_handler);
    cfg.service(crate::hours::adapter::incoming::web::routes::hours_stats_handler);
    cfg.service(crate::hours::adapter::incoming::web::routes::project_hours_handler);
    cfg.service(crate::hours::adapter::incoming::web::routes::verify_hours_handler);
    cfg.service(crate::hours::adapter::incoming::web::routes::reject_hours_handler);
    // Notifications: unread-count and read-all must come before /{id}
    cfg.service(crate::notification::adapter::incoming::web::routes::unread_count_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::mark_all_read_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::list_notifications_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::mark_read_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::delete_notification_handler);
    // Badges
    cfg.service(crate::badge::adapter::incoming::web::routes::list_badges_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
