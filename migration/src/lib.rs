pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users_table;
mod m20250810_000002_create_projects_table;
mod m20250810_000003_create_project_volunteers_table;
mod m20250810_000004_create_join_requests_table;
mod m20250810_000005_create_volunteer_hours_table;
mod m20250810_000006_create_notifications_table;
mod m20250810_000007_create_badges_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users_table::Migration),
            Box::new(m20250810_000002_create_projects_table::Migration),
            Box::new(m20250810_000003_create_project_volunteers_table::Migration),
            Box::new(m20250810_000004_create_join_requests_table::Migration),
            Box::new(m20250810_000005_create_volunteer_hours_table::Migration),
            Box::new(m20250810_000006_create_notifications_table::Migration),
            Box::new(m20250810_000007_create_badges_table::Migration),
        ]
    }
}
