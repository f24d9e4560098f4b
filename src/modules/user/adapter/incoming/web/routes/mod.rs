pub mod approve_user;
pub mod ban_user;
pub mod list_users;
pub mod user_details;

pub use approve_user::approve_user_handler;
pub use ban_user::{ban_user_handler, unban_user_handler};
pub use list_users::list_users_handler;
pub use user_details::user_details_handler;
