pub mod list_badges;

pub use list_badges::list_badges_handler;
