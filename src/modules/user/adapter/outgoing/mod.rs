pub mod admin_user_repository_postgres;
pub mod user_directory_postgres;

pub use admin_user_repository_postgres::AdminUserRepositoryPostgres;
pub use user_directory_postgres::UserDirectoryPostgres;
