use async_trait::async_trait;
use mockall::mock;
use schoolbook_core::errors::SchoolResult;
use schoolbook_core::models::{
    course::{Course, Enrollment},
    person::{PersonName, Student, Teacher},
    schedule::{NewSchedule, Schedule},
    weekday::Weekday,
};
use uuid::Uuid;

// Mock store for testing
mock! {
    pub SchoolStore {}

    #[async_trait]
    impl crate::store::SchoolStore for SchoolStore {
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
}
