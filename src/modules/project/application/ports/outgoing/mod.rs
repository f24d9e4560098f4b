pub mod join_request_repository;
pub mod project_repository;

pub use join_request_repository::{
    JoinRequestRepository, JoinRequestRepositoryError, NewJoinRequest,
};
pub use project_repository::{
    NewProjectData, ProjectPage, ProjectRepository, ProjectRepositoryError, ProjectUpdateData,
};
