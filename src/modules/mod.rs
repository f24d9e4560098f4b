pub mod auth;
pub mod badge;
pub mod email;
pub mod hours;
pub mod notification;
pub mod project;
pub mod user;
