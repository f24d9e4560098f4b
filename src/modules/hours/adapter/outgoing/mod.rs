pub mod hours_repository_postgres;
pub mod sea_orm_entity;
pub mod volunteer_ledger_postgres;

pub use hours_repository_postgres::HoursRepositoryPostgres;
pub use volunteer_ledger_postgres::VolunteerLedgerPostgres;
