pub mod hours_stats;
pub mod log_hours;
pub mod my_hours;
pub mod pending_hours;
pub mod project_hours;
pub mod reject_hours;
pub mod verify_hours;

pub use hours_stats::hours_stats_handler;
pub use log_hours::log_hours_handler;
pub use my_hours::my_hours_handler;
pub use pending_hours::pending_hours_handler;
pub use project_hours::project_hours_handler;
pub use reject_hours::reject_hours_handler;
pub use verify_hours::verify_hours_handler;
