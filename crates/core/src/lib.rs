//! # Schoolbook Core
//!
//! Domain types shared by the storage and application crates: people,
//! courses, the weekday catalog, and class schedules. The only types with
//! real invariants are [`models::time::TimeValue`] and
//! [`models::interval::ScheduleInterval`]; every schedule embeds one
//! validated interval.

pub mod errors;
pub mod models;

pub use errors::{SchoolError, SchoolResult};
