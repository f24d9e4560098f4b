use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, FetchProfileUseCase, LoginUserUseCase, RefreshTokenUseCase,
    RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::badge::application::ports::incoming::use_cases::ListBadgesUseCase;
use crate::hours::application::ports::incoming::use_cases::{
    HoursStatsUseCase, LogHoursUseCase, MyHoursUseCase, PendingHoursUseCase, ProjectHoursUseCase,
    RejectHoursUseCase, VerifyHoursUseCase,
};
use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationUseCase, ListNotificationsUseCase, MarkAllReadUseCase,
    MarkNotificationReadUseCase, UnreadCountUseCase,
};
use crate::project::application::ports::incoming::use_cases::{
    ApproveJoinRequestUseCase, CreateProjectUseCase, GetProjectUseCase, ListPendingRequestsUseCase,
    ListProjectsUseCase, RejectJoinRequestUseCase, RequestToJoinUseCase, UpdateProjectUseCase,
};
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    ApproveUserUseCase, BanUserUseCase, GetUserDetailsUseCase, ListUsersUseCase, UnbanUserUseCase,
};
use crate::AppState;

/// Builds a `web::Data<AppState>` for handler tests. Every use case defaults
/// to a panicking stub, so a test swaps in mocks only for the handlers it hits.
pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn RegisterUserUseCase>>,
    login_user: Option<Arc<dyn LoginUserUseCase>>,
    refresh_token: Option<Arc<dyn RefreshTokenUseCase>>,
    fetch_profile: Option<Arc<dyn FetchProfileUseCase>>,
    update_profile: Option<Arc<dyn UpdateProfileUseCase>>,
    change_password: Option<Arc<dyn ChangePasswordUseCase>>,
    list_users: Option<Arc<dyn ListUsersUseCase>>,
    get_user_details: Option<Arc<dyn GetUserDetailsUseCase>>,
    approve_user: Option<Arc<dyn ApproveUserUseCase>>,
    ban_user: Option<Arc<dyn BanUserUseCase>>,
    unban_user: Option<Arc<dyn UnbanUserUseCase>>,
    create_project: Option<Arc<dyn CreateProjectUseCase>>,
    list_projects: Option<Arc<dyn ListProjectsUseCase>>,
    get_project: Option<Arc<dyn GetProjectUseCase>>,
    update_project: Option<Arc<dyn UpdateProjectUseCase>>,
    request_to_join: Option<Arc<dyn RequestToJoinUseCase>>,
    list_pending_requests: Option<Arc<dyn ListPendingRequestsUseCase>>,
    approve_join_request: Option<Arc<dyn ApproveJoinRequestUseCase>>,
    reject_join_request: Option<Arc<dyn RejectJoinRequestUseCase>>,
    log_hours: Option<Arc<dyn LogHoursUseCase>>,
    my_hours: Option<Arc<dyn MyHoursUseCase>>,
    project_hours: Option<Arc<dyn ProjectHoursUseCase>>,
    pending_hours: Option<Arc<dyn PendingHoursUseCase>>,
    verify_hours: Option<Arc<dyn VerifyHoursUseCase>>,
    reject_hours: Option<Arc<dyn RejectHoursUseCase>>,
    hours_stats: Option<Arc<dyn HoursStatsUseCase>>,
    list_notifications: Option<Arc<dyn ListNotificationsUseCase>>,
    unread_count: Option<Arc<dyn UnreadCountUseCase>>,
    mark_notification_read: Option<Arc<dyn MarkNotificationReadUseCase>>,
    mark_all_read: Option<Arc<dyn MarkAllReadUseCase>>,
    delete_notification: Option<Arc<dyn DeleteNotificationUseCase>>,
    list_badges: Option<Arc<dyn ListBadgesUseCase>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            refresh_token: Some(Arc::new(StubRefreshTokenUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            change_password: Some(Arc::new(StubChangePasswordUseCase)),
            list_users: Some(Arc::new(StubListUsersUseCase)),
            get_user_details: Some(Arc::new(StubGetUserDetailsUseCase)),
            approve_user: Some(Arc::new(StubApproveUserUseCase)),
            ban_user: Some(Arc::new(StubBanUserUseCase)),
            unban_user: Some(Arc::new(StubUnbanUserUseCase)),
            create_project: Some(Arc::new(StubCreateProjectUseCase)),
            list_projects: Some(Arc::new(StubListProjectsUseCase)),
            get_project: Some(Arc::new(StubGetProjectUseCase)),
            update_project: Some(Arc::new(StubUpdateProjectUseCase)),
            request_to_join: Some(Arc::new(StubRequestToJoinUseCase)),
            list_pending_requests: Some(Arc::new(StubListPendingRequestsUseCase)),
            approve_join_request: Some(Arc::new(StubApproveJoinRequestUseCase)),
            reject_join_request: Some(Arc::new(StubRejectJoinRequestUseCase)),
            log_hours: Some(Arc::new(StubLogHoursUseCase)),
            my_hours: Some(Arc::new(StubMyHoursUseCase)),
            project_hours: Some(Arc::new(StubProjectHoursUseCase)),
            pending_hours: Some(Arc::new(StubPendingHoursUseCase)),
            verify_hours: Some(Arc::new(StubVerifyHoursUseCase)),
            reject_hours: Some(Arc::new(StubRejectHoursUseCase)),
            hours_stats: Some(Arc::new(StubHoursStatsUseCase)),
            list_notifications: Some(Arc::new(StubListNotificationsUseCase)),
            unread_count: Some(Arc::new(StubUnreadCountUseCase)),
            mark_notification_read: Some(Arc::new(StubMarkNotificationReadUseCase)),
            mark_all_read: Some(Arc::new(StubMarkAllReadUseCase)),
            delete_notification: Some(Arc::new(StubDeleteNotificationUseCase)),
            list_badges: Some(Arc::new(StubListBadgesUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh_token(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.refresh_token = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl FetchProfileUseCase + 'static) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_change_password(mut self, uc: impl ChangePasswordUseCase + 'static) -> Self {
        self.change_password = Some(Arc::new(uc));
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + 'static) -> Self {
        self.list_users = Some(Arc::new(uc));
        self
    }

    pub fn with_list_users_arc(mut self, uc: Arc<dyn ListUsersUseCase>) -> Self {
        self.list_users = Some(uc);
        self
    }

    pub fn with_get_user_details(mut self, uc: impl GetUserDetailsUseCase + 'static) -> Self {
        self.get_user_details = Some(Arc::new(uc));
        self
    }

    pub fn with_approve_user(mut self, uc: impl ApproveUserUseCase + 'static) -> Self {
        self.approve_user = Some(Arc::new(uc));
        self
    }

    pub fn with_ban_user(mut self, uc: impl BanUserUseCase + 'static) -> Self {
        self.ban_user = Some(Arc::new(uc));
        self
    }

    pub fn with_unban_user(mut self, uc: impl UnbanUserUseCase + 'static) -> Self {
        self.unban_user = Some(Arc::new(uc));
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.create_project = Some(Arc::new(uc));
        self
    }

    pub fn with_list_projects(mut self, uc: impl ListProjectsUseCase + 'static) -> Self {
        self.list_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + 'static) -> Self {
        self.get_project = Some(Arc::new(uc));
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.update_project = Some(Arc::new(uc));
        self
    }

    pub fn with_request_to_join(mut self, uc: impl RequestToJoinUseCase + 'static) -> Self {
        self.request_to_join = Some(Arc::new(uc));
        self
    }

    pub fn with_list_pending_requests(
        mut self,
        uc: impl ListPendingRequestsUseCase + 'static,
    ) -> Self {
        self.list_pending_requests = Some(Arc::new(uc));
        self
    }

    pub fn with_approve_join_request(
        mut self,
        uc: impl ApproveJoinRequestUseCase + 'static,
    ) -> Self {
        self.approve_join_request = Some(Arc::new(uc));
        self
    }

    pub fn with_reject_join_request(mut self, uc: impl RejectJoinRequestUseCase + 'static) -> Self {
        self.reject_join_request = Some(Arc::new(uc));
        self
    }

    pub fn with_log_hours(mut self, uc: impl LogHoursUseCase + 'static) -> Self {
        self.log_hours = Some(Arc::new(uc));
        self
    }

    pub fn with_my_hours(mut self, uc: impl MyHoursUseCase + 'static) -> Self {
        self.my_hours = Some(Arc::new(uc));
        self
    }

    pub fn with_project_hours(mut self, uc: impl ProjectHoursUseCase + 'static) -> Self {
        self.project_hours = Some(Arc::new(uc));
        self
    }

    pub fn with_pending_hours(mut self, uc: impl PendingHoursUseCase + 'static) -> Self {
        self.pending_hours = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_hours(mut self, uc: impl VerifyHoursUseCase + 'static) -> Self {
        self.verify_hours = Some(Arc::new(uc));
        self
    }

    pub fn with_reject_hours(mut self, uc: impl RejectHoursUseCase + 'static) -> Self {
        self.reject_hours = Some(Arc::new(uc));
        self
    }

    pub fn with_hours_stats(mut self, uc: impl HoursStatsUseCase + 'static) -> Self {
        self.hours_stats = Some(Arc::new(uc));
        self
    }

    pub fn with_list_notifications(mut self, uc: impl ListNotificationsUseCase + 'static) -> Self {
        self.list_notifications = Some(Arc::new(uc));
        self
    }

    pub fn with_list_notifications_arc(mut self, uc: Arc<dyn ListNotificationsUseCase>) -> Self {
        self.list_notifications = Some(uc);
        self
    }

    pub fn with_unread_count(mut self, uc: impl UnreadCountUseCase + 'static) -> Self {
        self.unread_count = Some(Arc::new(uc));
        self
    }

    pub fn with_mark_notification_read(
        mut self,
        uc: impl MarkNotificationReadUseCase + 'static,
    ) -> Self {
        self.mark_notification_read = Some(Arc::new(uc));
        self
    }

    pub fn with_mark_all_read(mut self, uc: impl MarkAllReadUseCase + 'static) -> Self {
        self.mark_all_read = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_notification(mut self, uc: impl DeleteNotificationUseCase + 'static) -> Self {
        self.delete_notification = Some(Arc::new(uc));
        self
    }

    pub fn with_list_badges(mut self, uc: impl ListBadgesUseCase + 'static) -> Self {
        self.list_badges = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            refresh_token_use_case: self.refresh_token.unwrap(),
            fetch_profile_use_case: self.fetch_profile.unwrap(),
            update_profile_use_case: self.update_profile.unwrap(),
            change_password_use_case: self.change_password.unwrap(),
            list_users_use_case: self.list_users.unwrap(),
            get_user_details_use_case: self.get_user_details.unwrap(),
            approve_user_use_case: self.approve_user.unwrap(),
            ban_user_use_case: self.ban_user.unwrap(),
            unban_user_use_case: self.unban_user.unwrap(),
            create_project_use_case: self.create_project.unwrap(),
            list_projects_use_case: self.list_projects.unwrap(),
            get_project_use_case: self.get_project.unwrap(),
            update_project_use_case: self.update_project.unwrap(),
            request_to_join_use_case: self.request_to_join.unwrap(),
            list_pending_requests_use_case: self.list_pending_requests.unwrap(),
            approve_join_request_use_case: self.approve_join_request.unwrap(),
            reject_join_request_use_case: self.reject_join_request.unwrap(),
            log_hours_use_case: self.log_hours.unwrap(),
            my_hours_use_case: self.my_hours.unwrap(),
            project_hours_use_case: self.project_hours.unwrap(),
            pending_hours_use_case: self.pending_hours.unwrap(),
            verify_hours_use_case: self.verify_hours.unwrap(),
            reject_hours_use_case: self.reject_hours.unwrap(),
            hours_stats_use_case: self.hours_stats.unwrap(),
            list_notifications_use_case: self.list_notifications.unwrap(),
            unread_count_use_case: self.unread_count.unwrap(),
            mark_notification_read_use_case: self.mark_notification_read.unwrap(),
            mark_all_read_use_case: self.mark_all_read.unwrap(),
            delete_notification_use_case: self.delete_notification.unwrap(),
            list_badges_use_case: self.list_badges.unwrap(),
        })
    }
}
