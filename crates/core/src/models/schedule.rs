use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::interval::ScheduleInterval;
use super::weekday::Weekday;
use crate::errors::SchoolResult;

/// A recurring class: one course, taught by one teacher, on one weekday,
/// within one validated time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub weekday: Weekday,
    pub interval: ScheduleInterval,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.weekday, self.interval)
    }
}

/// A schedule that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchedule {
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub weekday: Weekday,
    pub interval: ScheduleInterval,
}

impl NewSchedule {
    pub fn new(
        course_id: Uuid,
        teacher_id: Uuid,
        weekday: Weekday,
        start: &str,
        end: &str,
    ) -> SchoolResult<Self> {
        Ok(Self {
            course_id,
            teacher_id,
            weekday,
            interval: ScheduleInterval::new(start, end)?,
        })
    }
}
