pub mod badge_repository;

pub use badge_repository::{BadgeRepository, BadgeRepositoryError};
