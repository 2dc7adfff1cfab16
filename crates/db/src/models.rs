use chrono::{DateTime, Utc};
use schoolbook_core::errors::SchoolError;
use schoolbook_core::models::{
    course::{Course, Enrollment},
    interval::ScheduleInterval,
    person::{PersonName, Student, Teacher},
    schedule::Schedule,
    weekday::Weekday,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: Uuid,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEnrollment {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeekday {
    pub id: i16,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub weekday_id: i16,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

fn person_name(
    first_name: String,
    paternal_surname: String,
    maternal_surname: Option<String>,
) -> PersonName {
    PersonName {
        first_name,
        paternal_surname,
        maternal_surname,
    }
}

impl From<DbStudent> for Student {
    fn from(row: DbStudent) -> Self {
        Student {
            id: row.id,
            name: person_name(row.first_name, row.paternal_surname, row.maternal_surname),
            created_at: row.created_at,
        }
    }
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher {
            id: row.id,
            name: person_name(row.first_name, row.paternal_surname, row.maternal_surname),
            created_at: row.created_at,
        }
    }
}

impl From<DbCourse> for Course {
    fn from(row: DbCourse) -> Self {
        Course {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl From<DbEnrollment> for Enrollment {
    fn from(row: DbEnrollment) -> Self {
        Enrollment {
            student_id: row.student_id,
            course_id: row.course_id,
            enrolled_at: row.enrolled_at,
        }
    }
}

impl TryFrom<DbWeekday> for Weekday {
    type Error = SchoolError;

    fn try_from(row: DbWeekday) -> Result<Self, Self::Error> {
        Weekday::from_id(row.id)
            .ok_or_else(|| SchoolError::Validation(format!("unknown weekday id {}", row.id)))
    }
}

/// Stored rows are re-validated on the way out so a schedule never exists
/// in memory with a broken interval.
impl TryFrom<DbSchedule> for Schedule {
    type Error = SchoolError;

    fn try_from(row: DbSchedule) -> Result<Self, Self::Error> {
        let weekday = Weekday::from_id(row.weekday_id).ok_or_else(|| {
            SchoolError::Validation(format!(
                "schedule {} has unknown weekday id {}",
                row.id, row.weekday_id
            ))
        })?;
        let interval = ScheduleInterval::new(&row.start_time, &row.end_time)?;

        Ok(Schedule {
            id: row.id,
            course_id: row.course_id,
            teacher_id: row.teacher_id,
            weekday,
            interval,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schedule_row(weekday_id: i16, start: &str, end: &str) -> DbSchedule {
        DbSchedule {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            teacher_id: Uuid::new_v4(),
            weekday_id,
            start_time: start.to_string(),
            end_time: end.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_schedule_row_converts() {
        let row = schedule_row(2, "08:00", "09:30");
        let schedule = Schedule::try_from(row).unwrap();

        assert_eq!(schedule.weekday, Weekday::Tuesday);
        assert_eq!(schedule.to_string(), "Tuesday, from 08:00 hours to 09:30 hours");
    }

    #[test]
    fn test_schedule_row_with_bad_weekday() {
        let row = schedule_row(9, "08:00", "09:30");
        assert!(matches!(
            Schedule::try_from(row),
            Err(SchoolError::Validation(_))
        ));
    }

    #[test]
    fn test_schedule_row_with_inverted_interval() {
        let row = schedule_row(1, "10:00", "09:30");
        assert!(matches!(
            Schedule::try_from(row),
            Err(SchoolError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_student_row_converts() {
        let row = DbStudent {
            id: Uuid::new_v4(),
            first_name: "Ana".to_string(),
            paternal_surname: "García".to_string(),
            maternal_surname: None,
            created_at: Utc::now(),
        };
        let student = Student::from(row);
        assert_eq!(student.to_string(), "Ana García");
    }

    #[test]
    fn test_weekday_row_converts() {
        let row = DbWeekday {
            id: 5,
            name: "Friday".to_string(),
        };
        assert_eq!(Weekday::try_from(row).unwrap(), Weekday::Friday);
    }
}
