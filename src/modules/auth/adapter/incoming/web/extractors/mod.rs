pub mod auth;

pub use auth::{AdminUser, AuthenticatedUser, StaffUser, VolunteerUser};
