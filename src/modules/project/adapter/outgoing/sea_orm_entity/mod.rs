pub mod join_requests;
pub mod project_volunteers;
pub mod projects;
