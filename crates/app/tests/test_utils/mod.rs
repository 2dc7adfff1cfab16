#![allow(dead_code)]

use chrono::Utc;
use schoolbook_core::models::{
    course::{Course, Enrollment},
    interval::ScheduleInterval,
    person::{PersonName, Student, Teacher},
    schedule::Schedule,
    weekday::Weekday,
};
use schoolbook_db::mock::repositories::MockSchoolStore;
use uuid::Uuid;

/// A mock whose create calls echo their input back as stored records.
pub fn echoing_store() -> MockSchoolStore {
    let mut store = MockSchoolStore::new();
    echo_records(&mut store);
    echo_schedules(&mut store);
    store
}

/// Echoes students, teachers, courses and enrollments, but not schedules:
/// any `create_schedule` call on the returned mock panics.
pub fn echo_records(store: &mut MockSchoolStore) {
    store.expect_create_student().returning(|name| {
        Ok(Student {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        })
    });
    store.expect_create_teacher().returning(|name| {
        Ok(Teacher {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        })
    });
    store.expect_create_course().returning(|name| Ok(course(&name)));
    store
        .expect_enroll_student()
        .returning(|student_id, course_id| {
            Ok(Enrollment {
                student_id,
                course_id,
                enrolled_at: Utc::now(),
            })
        });
}

pub fn echo_schedules(store: &mut MockSchoolStore) {
    store.expect_create_schedule().returning(|new_schedule| {
        Ok(Schedule {
            id: Uuid::new_v4(),
            course_id: new_schedule.course_id,
            teacher_id: new_schedule.teacher_id,
            weekday: new_schedule.weekday,
            interval: new_schedule.interval,
            created_at: Utc::now(),
        })
    });
}

pub fn student(first: &str, paternal: &str, maternal: Option<&str>) -> Student {
    Student {
        id: Uuid::new_v4(),
        name: PersonName::new(first, paternal, maternal).unwrap(),
        created_at: Utc::now(),
    }
}

pub fn teacher(first: &str, paternal: &str, maternal: Option<&str>) -> Teacher {
    Teacher {
        id: Uuid::new_v4(),
        name: PersonName::new(first, paternal, maternal).unwrap(),
        created_at: Utc::now(),
    }
}

pub fn course(name: &str) -> Course {
    Course {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

pub fn schedule(course: &Course, teacher: &Teacher, weekday: Weekday, start: &str, end: &str) -> Schedule {
    Schedule {
        id: Uuid::new_v4(),
        course_id: course.id,
        teacher_id: teacher.id,
        weekday,
        interval: ScheduleInterval::new(start, end).unwrap(),
        created_at: Utc::now(),
    }
}
