use chrono::Utc;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use schoolbook_core::errors::SchoolError;
use schoolbook_core::models::{
    interval::ScheduleInterval,
    person::{PersonName, Teacher},
    schedule::Schedule,
    weekday::Weekday,
};
use schoolbook_db::SchoolStore;
use schoolbook_db::mock::repositories::MockSchoolStore;
use uuid::Uuid;

fn schedule_for(teacher_id: Uuid, weekday: Weekday, start: &str, end: &str) -> Schedule {
    Schedule {
        id: Uuid::new_v4(),
        course_id: Uuid::new_v4(),
        teacher_id,
        weekday,
        interval: ScheduleInterval::new(start, end).unwrap(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_mock_store_behind_trait_object() {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let name = PersonName::new(&first, &last, None).unwrap();

    let mut mock = MockSchoolStore::new();
    mock.expect_create_teacher()
        .times(1)
        .returning(|name| {
            Ok(Teacher {
                id: Uuid::new_v4(),
                name,
                created_at: Utc::now(),
            })
        });

    let store: Box<dyn SchoolStore> = Box::new(mock);
    let teacher = store.create_teacher(name.clone()).await.unwrap();

    assert_eq!(teacher.name, name);
}

#[rstest]
#[case(Weekday::Monday, "9:00", "10:00", "Monday, from 09:00 hours to 10:00 hours")]
#[case(Weekday::Saturday, "7:30", "8:15", "Saturday, from 07:30 hours to 08:15 hours")]
#[tokio::test]
async fn test_schedules_by_teacher(
    #[case] weekday: Weekday,
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: &str,
) {
    let teacher_id = Uuid::new_v4();
    let stored = vec![schedule_for(teacher_id, weekday, start, end)];

    let mut mock = MockSchoolStore::new();
    mock.expect_schedules_by_teacher()
        .with(eq(teacher_id))
        .times(1)
        .returning(move |_| Ok(stored.clone()));

    let schedules = mock.schedules_by_teacher(teacher_id).await.unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].to_string(), expected);
}

#[tokio::test]
async fn test_missing_course_surfaces_not_found() {
    let mut mock = MockSchoolStore::new();
    mock.expect_create_schedule()
        .returning(|s| Err(SchoolError::NotFound(format!("course with ID {}", s.course_id))));

    let new_schedule = schoolbook_core::models::schedule::NewSchedule::new(
        Uuid::nil(),
        Uuid::nil(),
        Weekday::Monday,
        "9:00",
        "10:00",
    )
    .unwrap();

    let err = mock.create_schedule(new_schedule).await.unwrap_err();
    assert!(matches!(err, SchoolError::NotFound(_)));
}
