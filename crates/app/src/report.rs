//! JSON summary of everything in the store.

use std::collections::HashMap;

use eyre::{Result, WrapErr};
use schoolbook_core::errors::{SchoolError, SchoolResult};
use schoolbook_core::models::{schedule::Schedule, weekday::Weekday};
use schoolbook_db::SchoolStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub students: Vec<PersonEntry>,
    pub teachers: Vec<TeacherEntry>,
    pub courses: Vec<CourseEntry>,
    pub schedules: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEntry {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherEntry {
    pub id: Uuid,
    pub name: String,
    pub schedules: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: Uuid,
    pub name: String,
    pub students: Vec<PersonEntry>,
    pub schedules: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub course: String,
    pub teacher: String,
    pub weekday: Weekday,
    pub start: String,
    pub end: String,
    /// e.g. "Monday, from 09:00 hours to 10:30 hours"
    pub description: String,
}

struct Names {
    courses: HashMap<Uuid, String>,
    teachers: HashMap<Uuid, String>,
}

impl Names {
    fn entry(&self, schedule: &Schedule) -> SchoolResult<ScheduleEntry> {
        let course = self.courses.get(&schedule.course_id).ok_or_else(|| {
            SchoolError::NotFound(format!(
                "course with ID {} for schedule {}",
                schedule.course_id, schedule.id
            ))
        })?;
        let teacher = self.teachers.get(&schedule.teacher_id).ok_or_else(|| {
            SchoolError::NotFound(format!(
                "teacher with ID {} for schedule {}",
                schedule.teacher_id, schedule.id
            ))
        })?;

        Ok(ScheduleEntry {
            id: schedule.id,
            course: course.clone(),
            teacher: teacher.clone(),
            weekday: schedule.weekday,
            start: schedule.interval.start_text(),
            end: schedule.interval.end_text(),
            description: schedule.to_string(),
        })
    }

    fn entries(&self, schedules: &[Schedule]) -> SchoolResult<Vec<ScheduleEntry>> {
        schedules.iter().map(|s| self.entry(s)).collect()
    }
}

/// Collects every record from `store` into a [`Report`].
pub async fn build_report<S>(store: &S) -> SchoolResult<Report>
where
    S: SchoolStore + ?Sized,
{
    let students = store.list_students().await?;
    let teachers = store.list_teachers().await?;
    let courses = store.list_courses().await?;

    let names = Names {
        courses: courses.iter().map(|c| (c.id, c.name.clone())).collect(),
        teachers: teachers.iter().map(|t| (t.id, t.to_string())).collect(),
    };

    let mut teacher_entries = Vec::with_capacity(teachers.len());
    for teacher in &teachers {
        let schedules = store.schedules_by_teacher(teacher.id).await?;
        teacher_entries.push(TeacherEntry {
            id: teacher.id,
            name: teacher.to_string(),
            schedules: names.entries(&schedules)?,
        });
    }

    let mut course_entries = Vec::with_capacity(courses.len());
    for course in &courses {
        let enrolled = store.students_by_course(course.id).await?;
        let schedules = store.schedules_by_course(course.id).await?;
        course_entries.push(CourseEntry {
            id: course.id,
            name: course.name.clone(),
            students: enrolled
                .iter()
                .map(|s| PersonEntry {
                    id: s.id,
                    name: s.to_string(),
                })
                .collect(),
            schedules: names.entries(&schedules)?,
        });
    }

    let schedules = store.list_schedules().await?;

    Ok(Report {
        students: students
            .iter()
            .map(|s| PersonEntry {
                id: s.id,
                name: s.to_string(),
            })
            .collect(),
        teachers: teacher_entries,
        courses: course_entries,
        schedules: names.entries(&schedules)?,
    })
}

pub fn render(report: &Report, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.wrap_err("Failed to serialize report")
}
