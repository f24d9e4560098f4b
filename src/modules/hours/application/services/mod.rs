pub mod hours_stats_service;
pub mod log_hours_service;
pub mod my_hours_service;
pub mod pending_hours_service;
pub mod project_hours_service;
pub mod reject_hours_service;
pub mod verify_hours_service;

pub use hours_stats_service::HoursStatsService;
pub use log_hours_service::LogHoursService;
pub use my_hours_service::MyHoursService;
pub use pending_hours_service::PendingHoursService;
pub use project_hours_service::ProjectHoursService;
pub use reject_hours_service::RejectHoursService;
pub use verify_hours_service::VerifyHoursService;
