//! Default use-case stubs for `TestAppStateBuilder`. Every stub panics when
//! called, so a handler test only ever exercises the mocks it installs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{
    AuthTokens, ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase,
    FetchProfileError, FetchProfileUseCase, LoginCommand, LoginError, LoginUserUseCase,
    RefreshTokenError, RefreshTokenUseCase, RefreshedToken, RegisterUserCommand,
    RegisterUserError, RegisterUserUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::badge::application::domain::entities::Badge;
use crate::badge::application::ports::incoming::use_cases::{BadgeError, ListBadgesUseCase};
use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
use crate::hours::application::ports::incoming::use_cases::{
    DecideHoursError, HoursError, HoursStatsResponse, HoursStatsUseCase, LogHoursCommand,
    LogHoursError, LogHoursUseCase, MyHoursQuery, MyHoursResponse, MyHoursUseCase,
    PendingHoursUseCase, ProjectHoursUseCase, RejectHoursUseCase, VerifyHoursUseCase,
};
use crate::notification::application::domain::entities::Notification;
use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationUseCase, ListNotificationsQuery, ListNotificationsUseCase,
    MarkAllReadUseCase, MarkNotificationReadUseCase, NotificationError, NotificationListResponse,
    UnreadCountUseCase,
};
use crate::project::application::domain::entities::{JoinRequest, Project, ProjectDetails};
use crate::project::application::ports::incoming::use_cases::{
    ApproveJoinRequestUseCase, CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
    GetProjectUseCase, JoinProjectError, JoinRequestDecisionError, ListPendingRequestsUseCase,
    ListProjectsQuery, ListProjectsUseCase, ProjectError, ProjectListResponse,
    RejectJoinRequestUseCase, RequestToJoinUseCase, UpdateProjectCommand, UpdateProjectError,
    UpdateProjectUseCase,
};
use crate::user::application::ports::incoming::use_cases::{
    AdminUserError, ApproveUserUseCase, BanUserUseCase, GetUserDetailsUseCase, ListUsersQuery,
    ListUsersUseCase, UnbanUserUseCase, UserListResponse,
};

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<PublicUser, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthTokens, LoginError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<RefreshedToken, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: UpdateProfileCommand,
    ) -> Result<PublicUser, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubChangePasswordUseCase;

#[async_trait]
impl ChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _query: ListUsersQuery) -> Result<UserListResponse, AdminUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetUserDetailsUseCase;

#[async_trait]
impl GetUserDetailsUseCase for StubGetUserDetailsUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApproveUserUseCase;

#[async_trait]
impl ApproveUserUseCase for StubApproveUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubBanUserUseCase;

#[async_trait]
impl BanUserUseCase for StubBanUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUnbanUserUseCase;

#[async_trait]
impl UnbanUserUseCase for StubUnbanUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, AdminUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
        _created_by: Uuid,
    ) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(
        &self,
        _query: ListProjectsQuery,
    ) -> Result<ProjectListResponse, ProjectError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetProjectUseCase;

#[async_trait]
impl GetProjectUseCase for StubGetProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<ProjectDetails, ProjectError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _command: UpdateProjectCommand,
        _edited_by: Uuid,
    ) -> Result<Project, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRequestToJoinUseCase;

#[async_trait]
impl RequestToJoinUseCase for StubRequestToJoinUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _volunteer_id: Uuid,
        _message: String,
    ) -> Result<JoinRequest, JoinProjectError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListPendingRequestsUseCase;

#[async_trait]
impl ListPendingRequestsUseCase for StubListPendingRequestsUseCase {
    async fn execute(&self) -> Result<Vec<JoinRequest>, JoinRequestDecisionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApproveJoinRequestUseCase;

#[async_trait]
impl ApproveJoinRequestUseCase for StubApproveJoinRequestUseCase {
    async fn execute(
        &self,
        _request_id: Uuid,
        _decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRejectJoinRequestUseCase;

#[async_trait]
impl RejectJoinRequestUseCase for StubRejectJoinRequestUseCase {
    async fn execute(
        &self,
        _request_id: Uuid,
        _decided_by: Uuid,
    ) -> Result<JoinRequest, JoinRequestDecisionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLogHoursUseCase;

#[async_trait]
impl LogHoursUseCase for StubLogHoursUseCase {
    async fn execute(
        &self,
        _volunteer_id: Uuid,
        _command: LogHoursCommand,
    ) -> Result<VolunteerHours, LogHoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubMyHoursUseCase;

#[async_trait]
impl MyHoursUseCase for StubMyHoursUseCase {
    async fn execute(
        &self,
        _volunteer_id: Uuid,
        _query: MyHoursQuery,
    ) -> Result<MyHoursResponse, HoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubProjectHoursUseCase;

#[async_trait]
impl ProjectHoursUseCase for StubProjectHoursUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _status: Option<HoursStatus>,
    ) -> Result<Vec<VolunteerHours>, HoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubPendingHoursUseCase;

#[async_trait]
impl PendingHoursUseCase for StubPendingHoursUseCase {
    async fn execute(&self) -> Result<Vec<VolunteerHours>, HoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubVerifyHoursUseCase;

#[async_trait]
impl VerifyHoursUseCase for StubVerifyHoursUseCase {
    async fn execute(
        &self,
        _entry_id: Uuid,
        _verifier_id: Uuid,
    ) -> Result<VolunteerHours, DecideHoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRejectHoursUseCase;

#[async_trait]
impl RejectHoursUseCase for StubRejectHoursUseCase {
    async fn execute(
        &self,
        _entry_id: Uuid,
        _verifier_id: Uuid,
        _reason: Option<String>,
    ) -> Result<VolunteerHours, DecideHoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubHoursStatsUseCase;

#[async_trait]
impl HoursStatsUseCase for StubHoursStatsUseCase {
    async fn execute(&self) -> Result<HoursStatsResponse, HoursError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListNotificationsUseCase;

#[async_trait]
impl ListNotificationsUseCase for StubListNotificationsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _query: ListNotificationsQuery,
    ) -> Result<NotificationListResponse, NotificationError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUnreadCountUseCase;

#[async_trait]
impl UnreadCountUseCase for StubUnreadCountUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<u64, NotificationError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubMarkNotificationReadUseCase;

#[async_trait]
impl MarkNotificationReadUseCase for StubMarkNotificationReadUseCase {
    async fn execute(
        &self,
        _notification_id: Uuid,
        _user_id: Uuid,
    ) -> Result<Notification, NotificationError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubMarkAllReadUseCase;

#[async_trait]
impl MarkAllReadUseCase for StubMarkAllReadUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<u64, NotificationError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeleteNotificationUseCase;

#[async_trait]
impl DeleteNotificationUseCase for StubDeleteNotificationUseCase {
    async fn execute(
        &self,
        _notification_id: Uuid,
        _user_id: Uuid,
    ) -> Result<(), NotificationError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListBadgesUseCase;

#[async_trait]
impl ListBadgesUseCase for StubListBadgesUseCase {
    async fn execute(&self) -> Result<Vec<Badge>, BadgeError> {
        unimplemented!("Not used in this test")
    }
}
