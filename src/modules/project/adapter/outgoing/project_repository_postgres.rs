use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::project::application::domain::entities::{Project, ProjectStatus};
use crate::project::application::ports::outgoing::{
    NewProjectData, ProjectPage, ProjectRepository, ProjectRepositoryError, ProjectUpdateData,
};

use super::sea_orm_entity::project_volunteers::{
    ActiveModel as RosterActiveModel, Column as RosterColumn, Entity as RosterEntity,
};
use super::sea_orm_entity::projects::{
    ActiveModel as ProjectActiveModel, Column, Entity as ProjectEntity, Model as ProjectModel,
};

#[derive(Clone, Debug)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_duplicate_error(e: sea_orm::DbErr) -> ProjectRepositoryError {
        let err_str = e.to_string().to_lowercase();
        let is_duplicate = err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint");

        if is_duplicate {
            return ProjectRepositoryError::DuplicateTitle;
        }
        ProjectRepositoryError::DatabaseError(e.to_string())
    }

    fn into_domain(model: ProjectModel) -> Result<Project, ProjectRepositoryError> {
        model
            .into_domain()
            .map_err(ProjectRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: NewProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let active = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            status: Set(ProjectStatus::Upcoming.as_str().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            location: Set(data.location),
            community: Set(data.community),
            beneficiaries_count: Set(data.beneficiaries_count),
            requirements: Set(serde_json::json!(data.requirements)),
            needed_volunteers: Set(data.needed_volunteers),
            created_by: Set(data.created_by),
            edited_by: Set(None),
            edited_at: Set(None),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_duplicate_error)?;

        Self::into_domain(inserted)
    }

    async fn list_projects(
        &self,
        status: Option<ProjectStatus>,
        page: u64,
        limit: u64,
    ) -> Result<ProjectPage, ProjectRepositoryError> {
        let mut query = ProjectEntity::find();
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        let projects = models
            .into_iter()
            .map(Self::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProjectPage { projects, total })
    }

    async fn find_by_id(&self, project_id: Uuid) -> Result<Project, ProjectRepositoryError> {
        let model = ProjectEntity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProjectRepositoryError::NotFound)?;

        Self::into_domain(model)
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        data: ProjectUpdateData,
        edited_by: Uuid,
    ) -> Result<Project, ProjectRepositoryError> {
        let model = ProjectEntity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut active: ProjectActiveModel = model.into();

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(status) = data.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(start_date) = data.start_date {
            active.start_date = Set(Some(start_date));
        }
        if let Some(end_date) = data.end_date {
            active.end_date = Set(Some(end_date));
        }
        if let Some(location) = data.location {
            active.location = Set(location);
        }
        if let Some(community) = data.community {
            active.community = Set(community);
        }
        if let Some(beneficiaries_count) = data.beneficiaries_count {
            active.beneficiaries_count = Set(beneficiaries_count);
        }
        if let Some(requirements) = data.requirements {
            active.requirements = Set(serde_json::json!(requirements));
        }
        if let Some(needed_volunteers) = data.needed_volunteers {
            active.needed_volunteers = Set(Some(needed_volunteers));
        }

        active.edited_by = Set(Some(edited_by));
        active.edited_at = Set(Some(Utc::now().into()));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_duplicate_error)?;

        Self::into_domain(updated)
    }

    async fn volunteer_ids(&self, project_id: Uuid) -> Result<Vec<Uuid>, ProjectRepositoryError> {
        RosterEntity::find()
            .select_only()
            .column(RosterColumn::VolunteerId)
            .filter(RosterColumn::ProjectId.eq(project_id))
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))
    }

    async fn is_volunteer(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<bool, ProjectRepositoryError> {
        let count = RosterEntity::find()
            .filter(RosterColumn::ProjectId.eq(project_id))
            .filter(RosterColumn::VolunteerId.eq(volunteer_id))
            .count(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn add_volunteer(
        &self,
        project_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<(), ProjectRepositoryError> {
        let row = RosterActiveModel {
            project_id: Set(project_id),
            volunteer_id: Set(volunteer_id),
        };

        RosterEntity::insert(row)
            .on_conflict(
                OnConflict::columns([RosterColumn::ProjectId, RosterColumn::VolunteerId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
