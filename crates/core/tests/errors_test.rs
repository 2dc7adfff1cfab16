use std::error::Error;
use schoolbook_core::errors::{SchoolError, SchoolResult};

#[test]
fn test_school_error_display() {
    let format = SchoolError::InvalidFormat("'24:00' is out of range".to_string());
    let interval = SchoolError::InvalidInterval {
        start: "13:00".to_string(),
        end: "12:00".to_string(),
    };
    let validation = SchoolError::Validation("first name must not be empty".to_string());
    let not_found = SchoolError::NotFound("course 'Algebra'".to_string());
    let database = SchoolError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(
        format.to_string(),
        "Invalid time format: '24:00' is out of range"
    );
    assert_eq!(
        interval.to_string(),
        "Invalid interval: end 12:00 must be later than start 13:00"
    );
    assert_eq!(
        validation.to_string(),
        "Validation error: first name must not be empty"
    );
    assert_eq!(not_found.to_string(), "Resource not found: course 'Algebra'");
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_invalid_record_classification() {
    assert!(SchoolError::InvalidFormat("x".into()).is_invalid_record());
    assert!(
        SchoolError::InvalidInterval {
            start: "10:00".into(),
            end: "09:00".into()
        }
        .is_invalid_record()
    );
    assert!(SchoolError::Validation("x".into()).is_invalid_record());

    assert!(!SchoolError::NotFound("x".into()).is_invalid_record());
    assert!(!SchoolError::Database(eyre::eyre!("down")).is_invalid_record());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("connection refused");
    let error: SchoolError = report.into();

    assert!(matches!(error, SchoolError::Database(_)));
    assert!(error.to_string().contains("connection refused"));
}

#[test]
fn test_core_errors_have_no_source() {
    let error = SchoolError::InvalidFormat("bad".into());
    assert!(error.source().is_none());
}

#[test]
fn test_school_result() {
    let result: SchoolResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: SchoolResult<i32> = Err(SchoolError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
