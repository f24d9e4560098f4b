use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsQuery, ListNotificationsUseCase, NotificationError, NotificationListResponse,
};
use crate::notification::application::ports::outgoing::NotificationRepository;
use crate::shared::api::Pagination;

pub struct ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListNotificationsUseCase for ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        query: ListNotificationsQuery,
    ) -> Result<NotificationListResponse, NotificationError> {
        let page = self
            .repository
            .list_for_user(user_id, query.read(), query.page(), query.limit())
            .await
            .map_err(|e| NotificationError::RepositoryError(e.to_string()))?;

        Ok(NotificationListResponse {
            pagination: Pagination::new(query.page(), query.limit(), page.total),
            unread_count: page.unread,
            notifications: page.notifications,
        })
    }
}
