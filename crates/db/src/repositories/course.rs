use crate::models::DbCourse;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_course(pool: &Pool<Postgres>, name: &str) -> Result<DbCourse> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating course: id={}, name={}", id, name);

    let course = sqlx::query_as::<_, DbCourse>(
        r#"
        INSERT INTO courses (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(course)
}

pub async fn get_course_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCourse>> {
    tracing::debug!("Getting course by id: {}", id);

    let course = sqlx::query_as::<_, DbCourse>(
        r#"
        SELECT id, name, created_at
        FROM courses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if course.is_none() {
        tracing::debug!("Course not found: id={}", id);
    }

    Ok(course)
}

pub async fn list_courses(pool: &Pool<Postgres>) -> Result<Vec<DbCourse>> {
    let courses = sqlx::query_as::<_, DbCourse>(
        r#"
        SELECT id, name, created_at
        FROM courses
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(courses)
}
