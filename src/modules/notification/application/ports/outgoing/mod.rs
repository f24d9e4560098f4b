pub mod notification_repository;
pub mod notification_writer;

pub use notification_repository::{
    NotificationPage, NotificationRepository, NotificationRepositoryError,
};
pub use notification_writer::{NewNotification, NotificationWriteError, NotificationWriter};
