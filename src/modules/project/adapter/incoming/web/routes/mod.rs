pub mod create_project;
pub mod decide_request;
pub mod get_project;
pub mod join_project;
pub mod list_projects;
pub mod pending_requests;
pub mod update_project;

pub use create_project::create_project_handler;
pub use decide_request::{approve_request_handler, reject_request_handler};
pub use get_project::get_project_handler;
pub use join_project::join_project_handler;
pub use list_projects::list_projects_handler;
pub use pending_requests::pending_requests_handler;
pub use update_project::update_project_handler;
