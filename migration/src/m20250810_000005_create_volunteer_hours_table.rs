use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerHours::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VolunteerHours::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VolunteerHours::VolunteerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VolunteerHours::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(VolunteerHours::Hours).double().not_null())
                    .col(ColumnDef::new(VolunteerHours::Description).string().not_null())
                    .col(ColumnDef::new(VolunteerHours::DateWorked).date().not_null())
                    .col(
                        ColumnDef::new(VolunteerHours::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(VolunteerHours::VerifiedBy).uuid())
                    .col(ColumnDef::new(VolunteerHours::VerifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(VolunteerHours::RejectionReason).string())
                    .col(
                        ColumnDef::new(VolunteerHours::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VolunteerHours::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_hours_volunteer_id")
                            .from(VolunteerHours::Table, VolunteerHours::VolunteerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_hours_project_id")
                            .from(VolunteerHours::Table, VolunteerHours::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Mirrors the original store's indexes: (volunteer, status) and (project)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_volunteer_hours_volunteer_status
                ON volunteer_hours (volunteer_id, status);

                CREATE INDEX idx_volunteer_hours_project_id
                ON volunteer_hours (project_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_volunteer_hours_volunteer_status;
                DROP INDEX IF EXISTS idx_volunteer_hours_project_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VolunteerHours::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VolunteerHours {
    Table,
    Id,
    VolunteerId,
    ProjectId,
    Hours,
    Description,
    DateWorked,
    Status,
    VerifiedBy,
    VerifiedAt,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
