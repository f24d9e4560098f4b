pub mod list_badges_service;

pub use list_badges_service::ListBadgesService;
