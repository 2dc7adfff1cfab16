use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{SchoolError, SchoolResult};

// ASCII digits only: `\d` would also accept other Unicode digit classes.
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("time pattern compiles"));

/// A wall-clock time on a 24-hour clock.
///
/// Values are only obtainable through [`TimeValue::parse`] (or
/// [`TimeValue::from_hm`]), so `hour` is always in `0..=23` and `minute` in
/// `0..=59`. Ordering compares the hour first, then the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    /// Parses `H:MM` or `HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns [`SchoolError::InvalidFormat`] when the text does not match
    /// the pattern, or when the hour is 24 or more or the minute exceeds 59.
    pub fn parse(text: &str) -> SchoolResult<Self> {
        let captures = TIME_PATTERN
            .captures(text)
            .ok_or_else(|| SchoolError::InvalidFormat(format!("'{text}' is not H:MM or HH:MM")))?;

        let hour = parse_field(&captures[1], text)?;
        let minute = parse_field(&captures[2], text)?;

        Self::from_hm(hour, minute)
            .map_err(|_| SchoolError::InvalidFormat(format!("'{text}' is out of range")))
    }

    /// Builds a time from numeric parts, applying the same range checks as
    /// [`TimeValue::parse`].
    pub fn from_hm(hour: u8, minute: u8) -> SchoolResult<Self> {
        if hour >= 24 {
            return Err(SchoolError::InvalidFormat(format!(
                "hour {hour} must be less than 24"
            )));
        }
        if minute > 59 {
            return Err(SchoolError::InvalidFormat(format!(
                "minute {minute} must not exceed 59"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// "Not later than". Equivalent to `self <= other`.
    pub fn is_not_later_than(&self, other: &TimeValue) -> bool {
        self <= other
    }
}

fn parse_field(digits: &str, text: &str) -> SchoolResult<u8> {
    digits
        .parse()
        .map_err(|_| SchoolError::InvalidFormat(format!("'{text}' has a non-numeric field")))
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeValue {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeValue {
    type Error = SchoolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.to_string()
    }
}
