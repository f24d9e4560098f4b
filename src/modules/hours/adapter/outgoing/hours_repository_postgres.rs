use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Alias;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use sea_orm::{ActiveModelTrait, FromQueryResult, Order};
use uuid::Uuid;

use crate::hours::application::domain::entities::{HoursStatus, VolunteerHours};
use crate::hours::application::ports::outgoing::{
    HoursRepository, HoursRepositoryError, MyHoursFilter, NewHoursEntry, VolunteerTotal,
};

use super::sea_orm_entity::volunteer_hours::{
    ActiveModel as HoursActiveModel, Column, Entity as HoursEntity, Model as HoursModel,
};

#[derive(Clone, Debug)]
pub struct HoursRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HoursRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn into_domain(model: HoursModel) -> Result<VolunteerHours, HoursRepositoryError> {
        model
            .into_domain()
            .map_err(HoursRepositoryError::DatabaseError)
    }

    async fn load(&self, entry_id: Uuid) -> Result<HoursModel, HoursRepositoryError> {
        HoursEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(HoursRepositoryError::NotFound)
    }
}

#[async_trait]
impl HoursRepository for HoursRepositoryPostgres {
    async fn create(&self, entry: NewHoursEntry) -> Result<VolunteerHours, HoursRepositoryError> {
        let active = HoursActiveModel {
            id: Set(Uuid::new_v4()),
            volunteer_id: Set(entry.volunteer_id),
            project_id: Set(entry.project_id),
            hours: Set(entry.hours),
            description: Set(entry.description),
            date_worked: Set(entry.date_worked),
            status: Set(HoursStatus::Pending.as_str().to_string()),
            verified_by: Set(None),
            verified_at: Set(None),
            rejection_reason: Set(None),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(inserted)
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<VolunteerHours, HoursRepositoryError> {
        let model = self.load(entry_id).await?;
        Self::into_domain(model)
    }

    async fn list_my(
        &self,
        volunteer_id: Uuid,
        filter: MyHoursFilter,
    ) -> Result<Vec<VolunteerHours>, HoursRepositoryError> {
        let mut query = HoursEntity::find().filter(Column::VolunteerId.eq(volunteer_id));
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(project_id) = filter.project_id {
            query = query.filter(Column::ProjectId.eq(project_id));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::into_domain).collect()
    }

    async fn sum_hours(
        &self,
        volunteer_id: Uuid,
        status: HoursStatus,
    ) -> Result<f64, HoursRepositoryError> {
        let total: Option<f64> = HoursEntity::find()
            .select_only()
            .column_as(Column::Hours.sum(), "total")
            .filter(Column::VolunteerId.eq(volunteer_id))
            .filter(Column::Status.eq(status.as_str()))
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?
            .flatten();

        Ok(total.unwrap_or(0.0))
    }

    async fn list_for_project(
        &self,
        project_id: Uuid,
        status: Option<HoursStatus>,
    ) -> Result<Vec<VolunteerHours>, HoursRepositoryError> {
        let mut query = HoursEntity::find().filter(Column::ProjectId.eq(project_id));
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::into_domain).collect()
    }

    async fn list_pending(&self) -> Result<Vec<VolunteerHours>, HoursRepositoryError> {
        let models = HoursEntity::find()
            .filter(Column::Status.eq(HoursStatus::Pending.as_str()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::into_domain).collect()
    }

    async fn mark_verified(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
    ) -> Result<VolunteerHours, HoursRepositoryError> {
        let model = self.load(entry_id).await?;

        let mut active: HoursActiveModel = model.into();
        active.status = Set(HoursStatus::Verified.as_str().to_string());
        active.verified_by = Set(Some(verifier_id));
        active.verified_at = Set(Some(Utc::now().into()));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(updated)
    }

    async fn mark_rejected(
        &self,
        entry_id: Uuid,
        verifier_id: Uuid,
        reason: String,
    ) -> Result<VolunteerHours, HoursRepositoryError> {
        let model = self.load(entry_id).await?;

        let mut active: HoursActiveModel = model.into();
        active.status = Set(HoursStatus::Rejected.as_str().to_string());
        active.verified_by = Set(Some(verifier_id));
        active.verified_at = Set(Some(Utc::now().into()));
        active.rejection_reason = Set(Some(reason));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        Self::into_domain(updated)
    }

    async fn total_verified_hours(&self) -> Result<f64, HoursRepositoryError> {
        let total: Option<f64> = HoursEntity::find()
            .select_only()
            .column_as(Column::Hours.sum(), "total")
            .filter(Column::Status.eq(HoursStatus::Verified.as_str()))
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?
            .flatten();

        Ok(total.unwrap_or(0.0))
    }

    async fn pending_count(&self) -> Result<u64, HoursRepositoryError> {
        HoursEntity::find()
            .filter(Column::Status.eq(HoursStatus::Pending.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))
    }

    async fn top_volunteers(
        &self,
        limit: u64,
    ) -> Result<Vec<VolunteerTotal>, HoursRepositoryError> {
        #[derive(Debug, FromQueryResult)]
        struct TotalsRow {
            volunteer_id: Uuid,
            total_hours: f64,
        }

        let rows = HoursEntity::find()
            .select_only()
            .column(Column::VolunteerId)
            .column_as(Column::Hours.sum(), "total_hours")
            .filter(Column::Status.eq(HoursStatus::Verified.as_str()))
            .group_by(Column::VolunteerId)
            .order_by(sea_orm::sea_query::Expr::col(Alias::new("total_hours")), Order::Desc)
            .limit(limit)
            .into_model::<TotalsRow>()
            .all(&*self.db)
            .await
            .map_err(|e| HoursRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| VolunteerTotal {
                volunteer_id: row.volunteer_id,
                total_hours: row.total_hours,
            })
            .collect())
    }
}
