pub mod join_request_repository_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;

pub use join_request_repository_postgres::JoinRequestRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
