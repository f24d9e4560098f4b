pub mod admin_user_repository;
pub mod user_directory;

pub use admin_user_repository::{
    AdminUserRepository, AdminUserRepositoryError, UserListFilter, UserPage,
};
pub use user_directory::{UserDirectory, UserDirectoryError};
