pub mod delete_notification_service;
pub mod list_notifications_service;
pub mod mark_all_read_service;
pub mod mark_read_service;
pub mod unread_count_service;

pub use delete_notification_service::DeleteNotificationService;
pub use list_notifications_service::ListNotificationsService;
pub use mark_all_read_service::MarkAllReadService;
pub use mark_read_service::MarkReadService;
pub use unread_count_service::UnreadCountService;
