use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Badges::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Badges::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Badges::Description).string().not_null())
                    .col(ColumnDef::new(Badges::Icon).string().not_null())
                    .col(ColumnDef::new(Badges::Tier).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Badges::CriteriaType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Badges::CriteriaValue).integer().not_null())
                    .col(
                        ColumnDef::new(Badges::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Badges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Static achievement ladder; nothing in the API awards these yet
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO badges (id, name, description, icon, tier, criteria_type, criteria_value)
                VALUES
                    (gen_random_uuid(), 'First Steps', '25 verified volunteer hours', 'medal-bronze', 'bronze', 'hours', 25),
                    (gen_random_uuid(), 'Community Pillar', '100 verified volunteer hours', 'medal-silver', 'silver', 'hours', 100),
                    (gen_random_uuid(), 'Regional Force', '200 verified volunteer hours', 'medal-gold', 'gold', 'hours', 200),
                    (gen_random_uuid(), 'Impact Ambassador', '500 verified volunteer hours', 'medal-platinum', 'platinum', 'hours', 500);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Badges {
    Table,
    Id,
    Name,
    Description,
    Icon,
    Tier,
    CriteriaType,
    CriteriaValue,
    IsActive,
    CreatedAt,
}
