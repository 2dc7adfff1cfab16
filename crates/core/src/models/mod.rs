pub mod course;
pub mod interval;
pub mod person;
pub mod schedule;
pub mod time;
pub mod weekday;
