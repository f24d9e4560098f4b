pub mod volunteer_hours;
