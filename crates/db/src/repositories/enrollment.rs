use crate::models::{DbEnrollment, DbStudent};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn enroll_student(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    course_id: Uuid,
) -> Result<DbEnrollment> {
    tracing::debug!(
        "Enrolling student: student_id={}, course_id={}",
        student_id,
        course_id
    );

    // Re-enrolling keeps the original enrollment date
    let enrollment = sqlx::query_as::<_, DbEnrollment>(
        r#"
        INSERT INTO enrollments (student_id, course_id, enrolled_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (student_id, course_id)
        DO UPDATE SET enrolled_at = enrollments.enrolled_at
        RETURNING student_id, course_id, enrolled_at
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(enrollment)
}

pub async fn get_students_by_course_id(
    pool: &Pool<Postgres>,
    course_id: Uuid,
) -> Result<Vec<DbStudent>> {
    let students = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT s.id, s.first_name, s.paternal_surname, s.maternal_surname, s.created_at
        FROM students s
        JOIN enrollments e ON e.student_id = s.id
        WHERE e.course_id = $1
        ORDER BY s.paternal_surname ASC, s.maternal_surname ASC NULLS FIRST, s.first_name ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(students)
}
