use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create project_volunteers join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectVolunteers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectVolunteers::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectVolunteers::VolunteerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectVolunteers::JoinedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(ProjectVolunteers::ProjectId)
                            .col(ProjectVolunteers::VolunteerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_volunteers_project_id")
                            .from(ProjectVolunteers::Table, ProjectVolunteers::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_volunteers_volunteer_id")
                            .from(ProjectVolunteers::Table, ProjectVolunteers::VolunteerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all projects for a volunteer
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_project_volunteers_volunteer_id
                ON project_volunteers (volunteer_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_project_volunteers_volunteer_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectVolunteers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectVolunteers {
    Table,
    ProjectId,
    VolunteerId,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
