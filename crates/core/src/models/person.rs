use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SchoolError, SchoolResult};

/// Full name of a student or teacher: a given name, a paternal surname and
/// an optional maternal surname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPersonName")]
pub struct PersonName {
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: Option<String>,
}

#[derive(Deserialize)]
struct RawPersonName {
    first_name: String,
    paternal_surname: String,
    maternal_surname: Option<String>,
}

impl TryFrom<RawPersonName> for PersonName {
    type Error = SchoolError;

    fn try_from(raw: RawPersonName) -> Result<Self, Self::Error> {
        Self::new(
            &raw.first_name,
            &raw.paternal_surname,
            raw.maternal_surname.as_deref(),
        )
    }
}

impl PersonName {
    /// Trims every part. The given name and paternal surname are required;
    /// a blank maternal surname becomes `None`.
    pub fn new(
        first_name: &str,
        paternal_surname: &str,
        maternal_surname: Option<&str>,
    ) -> SchoolResult<Self> {
        let first_name = required(first_name, "first name")?;
        let paternal_surname = required(paternal_surname, "paternal surname")?;
        let maternal_surname = maternal_surname
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            first_name,
            paternal_surname,
            maternal_surname,
        })
    }
}

fn required(value: &str, field: &str) -> SchoolResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SchoolError::Validation(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.paternal_surname)?;
        if let Some(maternal) = &self.maternal_surname {
            write!(f, " {maternal}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: PersonName,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Uuid,
    pub name: PersonName,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}
