use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JoinRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JoinRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JoinRequests::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(JoinRequests::VolunteerId).uuid().not_null())
                    .col(
                        ColumnDef::new(JoinRequests::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(JoinRequests::Message)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(JoinRequests::DecidedBy).uuid())
                    .col(ColumnDef::new(JoinRequests::DecidedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(JoinRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_requests_project_id")
                            .from(JoinRequests::Table, JoinRequests::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_requests_volunteer_id")
                            .from(JoinRequests::Table, JoinRequests::VolunteerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Verification queue scans on status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_join_requests_status
                ON join_requests (status);

                CREATE INDEX idx_join_requests_project_volunteer
                ON join_requests (project_id, volunteer_id);
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
                DROP INDEX IF EXISTS idx_join_requests_status;
                DROP INDEX IF EXISTS idx_join_requests_project_volunteer;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JoinRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JoinRequests {
    Table,
    Id,
    ProjectId,
    VolunteerId,
    Status,
    Message,
    DecidedBy,
    DecidedAt,
    CreatedAt,
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
