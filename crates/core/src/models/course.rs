use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SchoolError, SchoolResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Trimmed course name, rejecting blanks.
    pub fn validate_name(name: &str) -> SchoolResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchoolError::Validation(
                "course name must not be empty".to_string(),
            ));
        }
        Ok(name.to_string())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}
