//! The storage seam used by the application crate.
//!
//! [`SchoolStore`] exposes the school records as core domain types.
//! [`PgSchoolStore`] backs it with the Postgres repositories; tests use
//! [`crate::mock::repositories::MockSchoolStore`].

use async_trait::async_trait;
use schoolbook_core::errors::{SchoolError, SchoolResult};
use schoolbook_core::models::{
    course::{Course, Enrollment},
    person::{PersonName, Student, Teacher},
    schedule::{NewSchedule, Schedule},
    weekday::Weekday,
};
use uuid::Uuid;

use crate::DbPool;
use crate::repositories::{course, enrollment, schedule, student, teacher, weekday};

#[async_trait]
pub trait SchoolStore: Send + Sync {
    async fn create_student(&self, name: PersonName) -> SchoolResult<Student>;
    async fn create_teacher(&self, name: PersonName) -> SchoolResult<Teacher>;
    async fn create_course(&self, name: String) -> SchoolResult<Course>;
    async fn enroll_student(&self, student_id: Uuid, course_id: Uuid) -> SchoolResult<Enrollment>;
    async fn create_schedule(&self, schedule: NewSchedule) -> SchoolResult<Schedule>;

    async fn list_students(&self) -> SchoolResult<Vec<Student>>;
    async fn list_teachers(&self) -> SchoolResult<Vec<Teacher>>;
    async fn list_courses(&self) -> SchoolResult<Vec<Course>>;
    async fn list_weekdays(&self) -> SchoolResult<Vec<Weekday>>;
    async fn students_by_course(&self, course_id: Uuid) -> SchoolResult<Vec<Student>>;

    async fn list_schedules(&self) -> SchoolResult<Vec<Schedule>>;
    async fn schedules_by_course(&self, course_id: Uuid) -> SchoolResult<Vec<Schedule>>;
    async fn schedules_by_teacher(&self, teacher_id: Uuid) -> SchoolResult<Vec<Schedule>>;
}

/// [`SchoolStore`] over a Postgres pool.
#[derive(Clone)]
pub struct PgSchoolStore {
    pool: DbPool,
}

impl PgSchoolStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Turns a missing referenced row into `NotFound`, so callers see a
/// record-level error instead of a foreign-key violation.
fn require<T>(row: Option<T>, kind: &str, id: Uuid) -> SchoolResult<T> {
    row.ok_or_else(|| SchoolError::NotFound(format!("{kind} with ID {id}")))
}

fn into_schedules(rows: Vec<crate::models::DbSchedule>) -> SchoolResult<Vec<Schedule>> {
    rows.into_iter().map(Schedule::try_from).collect()
}

#[async_trait]
impl SchoolStore for PgSchoolStore {
    async fn create_student(&self, name: PersonName) -> SchoolResult<Student> {
        let row = student::create_student(&self.pool, &name).await?;
        Ok(row.into())
    }

    async fn create_teacher(&self, name: PersonName) -> SchoolResult<Teacher> {
        let row = teacher::create_teacher(&self.pool, &name).await?;
        Ok(row.into())
    }

    async fn create_course(&self, name: String) -> SchoolResult<Course> {
        let name = Course::validate_name(&name)?;
        let row = course::create_course(&self.pool, &name).await?;
        Ok(row.into())
    }

    async fn enroll_student(&self, student_id: Uuid, course_id: Uuid) -> SchoolResult<Enrollment> {
        let row = enrollment::enroll_student(&self.pool, student_id, course_id).await?;
        Ok(row.into())
    }

    async fn create_schedule(&self, new_schedule: NewSchedule) -> SchoolResult<Schedule> {
        let course_row = course::get_course_by_id(&self.pool, new_schedule.course_id).await?;
        require(course_row, "course", new_schedule.course_id)?;
        let teacher_row = teacher::get_teacher_by_id(&self.pool, new_schedule.teacher_id).await?;
        require(teacher_row, "teacher", new_schedule.teacher_id)?;

        let row = schedule::create_schedule(&self.pool, &new_schedule).await?;
        Schedule::try_from(row)
    }

    async fn list_students(&self) -> SchoolResult<Vec<Student>> {
        let rows = student::list_students(&self.pool).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn list_teachers(&self) -> SchoolResult<Vec<Teacher>> {
        let rows = teacher::list_teachers(&self.pool).await?;
        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn list_courses(&self) -> SchoolResult<Vec<Course>> {
        let rows = course::list_courses(&self.pool).await?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn list_weekdays(&self) -> SchoolResult<Vec<Weekday>> {
        let rows = weekday::list_weekdays(&self.pool).await?;
        rows.into_iter().map(Weekday::try_from).collect()
    }

    async fn students_by_course(&self, course_id: Uuid) -> SchoolResult<Vec<Student>> {
        let rows = enrollment::get_students_by_course_id(&self.pool, course_id).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn list_schedules(&self) -> SchoolResult<Vec<Schedule>> {
        into_schedules(schedule::list_schedules(&self.pool).await?)
    }

    async fn schedules_by_course(&self, course_id: Uuid) -> SchoolResult<Vec<Schedule>> {
        into_schedules(schedule::get_schedules_by_course_id(&self.pool, course_id).await?)
    }

    async fn schedules_by_teacher(&self, teacher_id: Uuid) -> SchoolResult<Vec<Schedule>> {
        into_schedules(schedule::get_schedules_by_teacher_id(&self.pool, teacher_id).await?)
    }
}
