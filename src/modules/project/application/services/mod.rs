pub mod create_project_service;
pub mod decide_join_request_service;
pub mod get_project_service;
pub mod join_project_service;
pub mod list_pending_requests_service;
pub mod list_projects_service;
pub mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use decide_join_request_service::DecideJoinRequestService;
pub use get_project_service::GetProjectService;
pub use join_project_service::JoinProjectService;
pub use list_pending_requests_service::ListPendingRequestsService;
pub use list_projects_service::ListProjectsService;
pub use update_project_service::UpdateProjectService;
