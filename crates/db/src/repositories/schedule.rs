use crate::models::DbSchedule;
use chrono::Utc;
use eyre::Result;
use schoolbook_core::models::schedule::NewSchedule;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule(pool: &Pool<Postgres>, schedule: &NewSchedule) -> Result<DbSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating schedule: id={}, course_id={}, teacher_id={}, weekday={}, start={}, end={}",
        id,
        schedule.course_id,
        schedule.teacher_id,
        schedule.weekday,
        schedule.interval.start(),
        schedule.interval.end()
    );

    let created = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, course_id, teacher_id, weekday_id, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, course_id, teacher_id, weekday_id, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(schedule.course_id)
    .bind(schedule.teacher_id)
    .bind(schedule.weekday.id())
    .bind(schedule.interval.start_text())
    .bind(schedule.interval.end_text())
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Schedule created successfully: id={}", id);
    Ok(created)
}

pub async fn list_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, course_id, teacher_id, weekday_id, start_time, end_time, created_at
        FROM schedules
        ORDER BY weekday_id ASC, start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

pub async fn get_schedules_by_course_id(
    pool: &Pool<Postgres>,
    course_id: Uuid,
) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, course_id, teacher_id, weekday_id, start_time, end_time, created_at
        FROM schedules
        WHERE course_id = $1
        ORDER BY weekday_id ASC, start_time ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

pub async fn get_schedules_by_teacher_id(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, course_id, teacher_id, weekday_id, start_time, end_time, created_at
        FROM schedules
        WHERE teacher_id = $1
        ORDER BY weekday_id ASC, start_time ASC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}
