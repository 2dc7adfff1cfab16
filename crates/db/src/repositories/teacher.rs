use crate::models::DbTeacher;
use chrono::Utc;
use eyre::Result;
use schoolbook_core::models::person::PersonName;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_teacher(pool: &Pool<Postgres>, name: &PersonName) -> Result<DbTeacher> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating teacher: id={}, name={}", id, name);

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (id, first_name, paternal_surname, maternal_surname, created_at)
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

    Ok(teacher)
}

pub async fn list_teachers(pool: &Pool<Postgres>) -> Result<Vec<DbTeacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, first_name, paternal_surname, maternal_surname, created_at
        FROM teachers
        ORDER BY paternal_surname ASC, maternal_surname ASC NULLS FIRST, first_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Listed {} teachers", teachers.len());
    Ok(teachers)
}

pub async fn get_teacher_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTeacher>> {
    tracing::debug!("Getting teacher by id: {}", id);

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, first_name, paternal_surname, maternal_surname, created_at
        FROM teachers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if teacher.is_none() {
        tracing::debug!("Teacher not found: id={}", id);
    }

    Ok(teacher)
}
