use crate::models::DbStudent;
use chrono::Utc;
use eyre::Result;
use schoolbook_core::models::person::PersonName;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_student(pool: &Pool<Postgres>, name: &PersonName) -> Result<DbStudent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating student: id={}, name={}", id, name);

    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO students (id, first_name, paternal_surname, maternal_surname, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, first_name, paternal_surname, maternal_surname, created_at
        "#,
    )
    .bind(id)
    .bind(&name.first_name)
    .bind(&name.paternal_surname)
    .bind(name.maternal_surname.as_deref())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(student)
}

pub async fn list_students(pool: &Pool<Postgres>) -> Result<Vec<DbStudent>> {
    let students = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, first_name, paternal_surname, maternal_surname, created_at
        FROM students
        ORDER BY paternal_surname ASC, maternal_surname ASC NULLS FIRST, first_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Listed {} students", students.len());
    Ok(students)
}
