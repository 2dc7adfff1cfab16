//! Sample-data population.
//!
//! Records in [`SampleData`] refer to each other by display key: people by
//! their full name, courses by name. Every record goes through the same
//! validation as any other input, and rejected records are handled
//! according to the configured [`InvalidRecordPolicy`].

use std::collections::HashMap;

use schoolbook_core::errors::{SchoolError, SchoolResult};
use schoolbook_core::models::{
    course::Course, person::PersonName, schedule::NewSchedule, weekday::Weekday,
};
use schoolbook_db::SchoolStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::InvalidRecordPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePerson {
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: Option<String>,
}

impl SamplePerson {
    pub fn new(first_name: &str, paternal_surname: &str, maternal_surname: Option<&str>) -> Self {
        Self {
            first_name: first_name.to_string(),
            paternal_surname: paternal_surname.to_string(),
            maternal_surname: maternal_surname.map(str::to_string),
        }
    }

    fn to_name(&self) -> SchoolResult<PersonName> {
        PersonName::new(
            &self.first_name,
            &self.paternal_surname,
            self.maternal_surname.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEnrollment {
    pub student: String,
    pub course: String,
}

/// A schedule with unparsed time strings, exactly as a user would type them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSchedule {
    pub course: String,
    pub teacher: String,
    pub weekday: Weekday,
    pub start: String,
    pub end: String,
}

impl SampleSchedule {
    pub fn new(course: &str, teacher: &str, weekday: Weekday, start: &str, end: &str) -> Self {
        Self {
            course: course.to_string(),
            teacher: teacher.to_string(),
            weekday,
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    pub students: Vec<SamplePerson>,
    pub teachers: Vec<SamplePerson>,
    pub courses: Vec<String>,
    pub enrollments: Vec<SampleEnrollment>,
    pub schedules: Vec<SampleSchedule>,
}

impl SampleData {
    /// The built-in demo school.
    pub fn standard() -> Self {
        let enroll = |student: &str, course: &str| SampleEnrollment {
            student: student.to_string(),
            course: course.to_string(),
        };

        Self {
            students: vec![
                SamplePerson::new("Ana", "García", Some("López")),
                SamplePerson::new("Luis", "Pérez", None),
                SamplePerson::new("Sofía", "Martínez", Some("Ruiz")),
                SamplePerson::new("Diego", "Hernández", Some("Cruz")),
            ],
            teachers: vec![
                SamplePerson::new("Marta", "Soto", Some("Díaz")),
                SamplePerson::new("Jorge", "Ramírez", None),
            ],
            courses: vec![
                "Algebra".to_string(),
                "Biology".to_string(),
                "History".to_string(),
            ],
            enrollments: vec![
                enroll("Ana García López", "Algebra"),
                enroll("Ana García López", "History"),
                enroll("Luis Pérez", "Algebra"),
                enroll("Luis Pérez", "Biology"),
                enroll("Sofía Martínez Ruiz", "Biology"),
                enroll("Diego Hernández Cruz", "History"),
            ],
            schedules: vec![
                SampleSchedule::new("Algebra", "Marta Soto Díaz", Weekday::Monday, "9:00", "10:30"),
                SampleSchedule::new("Algebra", "Marta Soto Díaz", Weekday::Wednesday, "9:00", "10:30"),
                SampleSchedule::new("Biology", "Jorge Ramírez", Weekday::Tuesday, "11:00", "12:30"),
                SampleSchedule::new("History", "Jorge Ramírez", Weekday::Thursday, "8:00", "9:00"),
                SampleSchedule::new("History", "Marta Soto Díaz", Weekday::Friday, "13:00", "14:30"),
            ],
        }
    }
}

/// Counts of what a seeding run stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub students: usize,
    pub teachers: usize,
    pub courses: usize,
    pub enrollments: usize,
    pub schedules: usize,
    pub rejected: usize,
}

/// Inserts `data` into `store`.
///
/// Record-level failures (see [`SchoolError::is_invalid_record`], plus
/// references to records that were never stored) follow `policy`. Storage
/// failures always propagate.
pub async fn seed<S>(
    store: &S,
    data: &SampleData,
    policy: InvalidRecordPolicy,
) -> SchoolResult<SeedSummary>
where
    S: SchoolStore + ?Sized,
{
    let mut summary = SeedSummary::default();
    let mut students: HashMap<String, Uuid> = HashMap::new();
    let mut teachers: HashMap<String, Uuid> = HashMap::new();
    let mut courses: HashMap<String, Uuid> = HashMap::new();

    for person in &data.students {
        let validated = person
            .to_name()
            .and_then(|name| claim_key(&students, &name.to_string(), "student").map(|_| name));
        let Some(name) = admit(validated, policy, &mut summary, "student")? else {
            continue;
        };
        let student = store.create_student(name).await?;
        students.insert(student.name.to_string(), student.id);
        summary.students += 1;
    }

    for person in &data.teachers {
        let validated = person
            .to_name()
            .and_then(|name| claim_key(&teachers, &name.to_string(), "teacher").map(|_| name));
        let Some(name) = admit(validated, policy, &mut summary, "teacher")? else {
            continue;
        };
        let teacher = store.create_teacher(name).await?;
        teachers.insert(teacher.name.to_string(), teacher.id);
        summary.teachers += 1;
    }

    for course_name in &data.courses {
        let validated = Course::validate_name(course_name)
            .and_then(|name| claim_key(&courses, &name, "course").map(|_| name));
        let Some(name) = admit(validated, policy, &mut summary, "course")? else {
            continue;
        };
        let course = store.create_course(name).await?;
        courses.insert(course.name.clone(), course.id);
        summary.courses += 1;
    }

    for enrollment in &data.enrollments {
        let resolved = resolve(&students, &enrollment.student, "student").and_then(|student_id| {
            resolve(&courses, &enrollment.course, "course").map(|course_id| (student_id, course_id))
        });
        let Some((student_id, course_id)) = admit(resolved, policy, &mut summary, "enrollment")?
        else {
            continue;
        };
        store.enroll_student(student_id, course_id).await?;
        summary.enrollments += 1;
    }

    for sample in &data.schedules {
        let validated = resolve(&courses, &sample.course, "course").and_then(|course_id| {
            let teacher_id = resolve(&teachers, &sample.teacher, "teacher")?;
            NewSchedule::new(course_id, teacher_id, sample.weekday, &sample.start, &sample.end)
        });
        let Some(new_schedule) = admit(validated, policy, &mut summary, "schedule")? else {
            continue;
        };
        let schedule = store.create_schedule(new_schedule).await?;
        tracing::debug!("Stored schedule {}: {}", schedule.id, schedule);
        summary.schedules += 1;
    }

    info!(
        "Seeded {} students, {} teachers, {} courses, {} enrollments, {} schedules ({} rejected)",
        summary.students,
        summary.teachers,
        summary.courses,
        summary.enrollments,
        summary.schedules,
        summary.rejected
    );

    Ok(summary)
}

/// Keys must identify a single record, otherwise references to them would
/// be ambiguous. The first record with a given key wins.
fn claim_key(ids: &HashMap<String, Uuid>, key: &str, kind: &str) -> SchoolResult<()> {
    if ids.contains_key(key) {
        return Err(SchoolError::Validation(format!("ambiguous {kind} key '{key}'")));
    }
    Ok(())
}

fn resolve(ids: &HashMap<String, Uuid>, key: &str, kind: &str) -> SchoolResult<Uuid> {
    ids.get(key)
        .copied()
        .ok_or_else(|| SchoolError::NotFound(format!("{kind} '{key}'")))
}

/// Applies the invalid-record policy to one validation outcome. `Ok(None)`
/// means the record was skipped.
fn admit<T>(
    result: SchoolResult<T>,
    policy: InvalidRecordPolicy,
    summary: &mut SeedSummary,
    kind: &str,
) -> SchoolResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if policy == InvalidRecordPolicy::Skip && is_record_level(&err) => {
            warn!("Skipping invalid {}: {}", kind, err);
            summary.rejected += 1;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn is_record_level(err: &SchoolError) -> bool {
    err.is_invalid_record() || matches!(err, SchoolError::NotFound(_))
}
