pub mod change_password;
pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod update_profile;
