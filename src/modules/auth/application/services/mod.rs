pub mod change_password_service;
pub mod fetch_profile_service;
pub mod login_user_service;
pub mod refresh_token_service;
pub mod register_user_service;
pub mod update_profile_service;

pub use change_password_service::ChangePasswordService;
pub use fetch_profile_service::FetchProfileService;
pub use login_user_service::LoginUserService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
