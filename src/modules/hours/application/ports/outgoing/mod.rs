pub mod hours_repository;
pub mod volunteer_ledger;

pub use hours_repository::{
    HoursRepository, HoursRepositoryError, MyHoursFilter, NewHoursEntry, VolunteerTotal,
};
pub use volunteer_ledger::{LedgerSnapshot, VolunteerLedger, VolunteerLedgerError};
