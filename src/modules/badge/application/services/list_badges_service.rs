use async_trait::async_trait;

use crate::badge::application::domain::entities::Badge;
use crate::badge::application::ports::incoming::use_cases::{BadgeError, ListBadgesUseCase};
use crate::badge::application::ports::outgoing::BadgeRepository;

pub struct ListBadgesService<R>
where
    R: BadgeRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListBadgesService<R>
where
    R: BadgeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListBadgesUseCase for ListBadgesService<R>
where
    R: BadgeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Badge>, BadgeError> {
        self.repository
            .list_active()
            .await
            .map_err(|e| BadgeError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::application::domain::entities::{BadgeCriteria, BadgeTier};
    use crate::badge::application::ports::outgoing::badge_repository::MockBadgeRepository;
    use crate::badge::application::ports::outgoing::BadgeRepositoryError;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn badges_come_straight_from_the_repository() {
        let mut repository = MockBadgeRepository::new();
        repository.expect_list_active().returning(|| {
            Ok(vec![Badge {
                id: Uuid::new_v4(),
                name: "First Steps".to_string(),
                description: "25 verified volunteer hours".to_string(),
                icon: "medal-bronze".to_string(),
                tier: BadgeTier::Bronze,
                criteria_type: BadgeCriteria::Hours,
                criteria_value: 25,
                is_active: true,
                created_at: Utc::now(),
            }])
        });

        let service = ListBadgesService::new(repository);

        let badges = service.execute().await.unwrap();

        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].tier, BadgeTier::Bronze);
    }

    #[tokio::test]
    async fn repository_failures_surface_as_errors() {
        let mut repository = MockBadgeRepository::new();
        repository
            .expect_list_active()
            .returning(|| Err(BadgeRepositoryError::DatabaseError("down".to_string())));

        let service = ListBadgesService::new(repository);

        assert!(service.execute().await.is_err());
    }
}
