use chrono::Utc;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use pretty_assertions::assert_eq;
use rstest::rstest;
use schoolbook_core::errors::SchoolError;
use schoolbook_core::models::{
    course::Course,
    interval::ScheduleInterval,
    person::{PersonName, Student, Teacher},
    schedule::{NewSchedule, Schedule},
    weekday::Weekday,
};
use serde_json::{from_str, to_string};
use uuid::Uuid;

#[test]
fn test_person_name_display_with_maternal_surname() {
    let name = PersonName::new("Ana", "García", Some("López")).unwrap();
    assert_eq!(name.to_string(), "Ana García López");
}

#[test]
fn test_person_name_display_without_maternal_surname() {
    let name = PersonName::new("Luis", "Pérez", None).unwrap();
    assert_eq!(name.to_string(), "Luis Pérez");
}

#[test]
fn test_person_name_trims_and_drops_blank_maternal() {
    let name = PersonName::new("  Eva ", " Ruiz", Some("   ")).unwrap();
    assert_eq!(name.first_name, "Eva");
    assert_eq!(name.paternal_surname, "Ruiz");
    assert_eq!(name.maternal_surname, None);
}

#[rstest]
#[case("", "Pérez")]
#[case("Luis", "")]
#[case("   ", "Pérez")]
fn test_person_name_requires_first_and_paternal(#[case] first: &str, #[case] paternal: &str) {
    let err = PersonName::new(first, paternal, None).unwrap_err();
    assert!(matches!(err, SchoolError::Validation(_)));
}

#[test]
fn test_person_name_with_generated_parts() {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();

    let name = PersonName::new(&first, &last, None).unwrap();
    assert_eq!(name.to_string(), format!("{} {}", first.trim(), last.trim()));
}

#[test]
fn test_student_and_teacher_display_their_names() {
    let student = Student {
        id: Uuid::new_v4(),
        name: PersonName::new("Ana", "García", Some("López")).unwrap(),
        created_at: Utc::now(),
    };
    let teacher = Teacher {
        id: Uuid::new_v4(),
        name: PersonName::new("Marta", "Soto", None).unwrap(),
        created_at: Utc::now(),
    };

    assert_eq!(student.to_string(), "Ana García López");
    assert_eq!(teacher.to_string(), "Marta Soto");
}

#[test]
fn test_student_serialization() {
    let student = Student {
        id: Uuid::new_v4(),
        name: PersonName::new("Ana", "García", None).unwrap(),
        created_at: Utc::now(),
    };

    let json = to_string(&student).expect("Failed to serialize student");
    let deserialized: Student = from_str(&json).expect("Failed to deserialize student");

    assert_eq!(deserialized, student);
}

#[test]
fn test_course_name_validation() {
    assert_eq!(Course::validate_name("  Algebra ").unwrap(), "Algebra");
    assert!(matches!(
        Course::validate_name(" "),
        Err(SchoolError::Validation(_))
    ));
}

#[rstest]
#[case(1, Weekday::Monday)]
#[case(3, Weekday::Wednesday)]
#[case(7, Weekday::Sunday)]
fn test_weekday_ids(#[case] id: i16, #[case] day: Weekday) {
    assert_eq!(Weekday::from_id(id), Some(day));
    assert_eq!(day.id(), id);
}

#[test]
fn test_weekday_catalog_is_complete() {
    assert_eq!(Weekday::ALL.len(), 7);
    assert_eq!(Weekday::from_id(0), None);
    assert_eq!(Weekday::from_id(8), None);
}

#[test]
fn test_weekday_parse() {
    assert_eq!("friday".parse::<Weekday>().unwrap(), Weekday::Friday);
    assert_eq!(" Tuesday ".parse::<Weekday>().unwrap(), Weekday::Tuesday);
    assert!(matches!(
        "Funday".parse::<Weekday>(),
        Err(SchoolError::Validation(_))
    ));
}

#[test]
fn test_schedule_display() {
    let schedule = Schedule {
        id: Uuid::new_v4(),
        course_id: Uuid::new_v4(),
        teacher_id: Uuid::new_v4(),
        weekday: Weekday::Monday,
        interval: ScheduleInterval::new("9:00", "10:30").unwrap(),
        created_at: Utc::now(),
    };

    assert_eq!(
        schedule.to_string(),
        "Monday, from 09:00 hours to 10:30 hours"
    );
}

#[test]
fn test_new_schedule_validates_interval() {
    let course_id = Uuid::new_v4();
    let teacher_id = Uuid::new_v4();

    let ok = NewSchedule::new(course_id, teacher_id, Weekday::Thursday, "8:00", "9:00").unwrap();
    assert_eq!(ok.interval.start_text(), "08:00");

    let equal = NewSchedule::new(course_id, teacher_id, Weekday::Thursday, "8:00", "8:00");
    assert!(matches!(equal, Err(SchoolError::InvalidInterval { .. })));

    let malformed = NewSchedule::new(course_id, teacher_id, Weekday::Thursday, "25:00", "9:00");
    assert!(matches!(malformed, Err(SchoolError::InvalidFormat(_))));
}

#[test]
fn test_schedule_serialization() {
    let schedule = Schedule {
        id: Uuid::new_v4(),
        course_id: Uuid::new_v4(),
        teacher_id: Uuid::new_v4(),
        weekday: Weekday::Friday,
        interval: ScheduleInterval::new("14:00", "15:45").unwrap(),
        created_at: Utc::now(),
    };

    let json = to_string(&schedule).expect("Failed to serialize schedule");
    assert!(json.contains(r#""weekday":"Friday""#));
    assert!(json.contains(r#""start":"14:00""#));

    let deserialized: Schedule = from_str(&json).expect("Failed to deserialize schedule");
    assert_eq!(deserialized, schedule);
}

#[test]
fn test_person_name_deserialize_validates() {
    let name: PersonName = from_str(
        r#"{"first_name":" Ana ","paternal_surname":"García","maternal_surname":""}"#,
    )
    .unwrap();
    assert_eq!(name, PersonName::new("Ana", "García", None).unwrap());

    let blank: Result<PersonName, _> =
        from_str(r#"{"first_name":"  ","paternal_surname":"García","maternal_surname":null}"#);
    let err = blank.unwrap_err();
    assert!(err.to_string().contains("first name must not be empty"));
}
