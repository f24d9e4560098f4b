pub mod badge_repository_postgres;
pub mod sea_orm_entity;

pub use badge_repository_postgres::BadgeRepositoryPostgres;
