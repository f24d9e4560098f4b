pub mod delete_notification;
pub mod list_notifications;
pub mod mark_all_read;
pub mod mark_read;
pub mod unread_count;

pub use delete_notification::delete_notification_handler;
pub use list_notifications::list_notifications_handler;
pub use mark_all_read::mark_all_read_handler;
pub use mark_read::mark_read_handler;
pub use unread_count::unread_count_handler;
