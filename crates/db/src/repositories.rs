pub mod course;
pub mod enrollment;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod weekday;
