use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::TimeValue;
use crate::errors::{SchoolError, SchoolResult};

/// The time window of a recurring class session.
///
/// `end` is always strictly later than `start`; an interval that ends when
/// it starts is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct ScheduleInterval {
    start: TimeValue,
    end: TimeValue,
}

#[derive(Deserialize)]
struct RawInterval {
    start: TimeValue,
    end: TimeValue,
}

impl TryFrom<RawInterval> for ScheduleInterval {
    type Error = SchoolError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::from_times(raw.start, raw.end)
    }
}

impl ScheduleInterval {
    /// Parses both endpoints and checks their order.
    ///
    /// Format errors on either endpoint are reported before the order is
    /// looked at, so `("25:00", "13:00")` is an `InvalidFormat`, not an
    /// `InvalidInterval`.
    pub fn new(start: &str, end: &str) -> SchoolResult<Self> {
        let start = TimeValue::parse(start)?;
        let end = TimeValue::parse(end)?;
        Self::from_times(start, end)
    }

    pub fn from_times(start: TimeValue, end: TimeValue) -> SchoolResult<Self> {
        if end.is_not_later_than(&start) {
            return Err(SchoolError::InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeValue {
        self.start
    }

    pub fn end(&self) -> TimeValue {
        self.end
    }

    /// Canonical `HH:MM` form of the start.
    pub fn start_text(&self) -> String {
        self.start.to_string()
    }

    /// Canonical `HH:MM` form of the end.
    pub fn end_text(&self) -> String {
        self.end.to_string()
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }
}

impl fmt::Display for ScheduleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} hours to {} hours", self.start, self.end)
    }
}
