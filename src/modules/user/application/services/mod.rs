pub mod approve_user_service;
pub mod get_user_details_service;
pub mod list_users_service;
pub mod manage_ban_service;

pub use approve_user_service::ApproveUserService;
pub use get_user_details_service::GetUserDetailsService;
pub use list_users_service::ListUsersService;
pub use manage_ban_service::ManageBanService;
