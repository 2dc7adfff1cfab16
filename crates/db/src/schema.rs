use eyre::Result;
use schoolbook_core::models::weekday::Weekday;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: [&str; 5] = [
    "CREATE INDEX IF NOT EXISTS idx_schedules_course_id ON schedules(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_schedules_teacher_id ON schedules(teacher_id)",
    "CREATE INDEX IF NOT EXISTS idx_schedules_weekday_id ON schedules(weekday_id)",
    "CREATE INDEX IF NOT EXISTS idx_enrollments_course_id ON enrollments(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_enrollments_student_id ON enrollments(student_id)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create weekdays catalog table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekdays (
            id SMALLINT PRIMARY KEY,
            name VARCHAR(16) NOT NULL UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create students table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            paternal_surname VARCHAR(255) NOT NULL,
            maternal_surname VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create teachers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            paternal_surname VARCHAR(255) NOT NULL,
            maternal_surname VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create courses table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create enrollments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            student_id UUID NOT NULL REFERENCES students(id),
            course_id UUID NOT NULL REFERENCES courses(id),
            enrolled_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (student_id, course_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedules table; times are canonical HH:MM text, so string
    // comparison matches time order
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            course_id UUID NOT NULL REFERENCES courses(id),
            teacher_id UUID NOT NULL REFERENCES teachers(id),
            weekday_id SMALLINT NOT NULL REFERENCES weekdays(id),
            start_time VARCHAR(5) NOT NULL,
            end_time VARCHAR(5) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    populate_weekdays(pool).await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

async fn populate_weekdays(pool: &Pool<Postgres>) -> Result<()> {
    for day in Weekday::ALL {
        sqlx::query(
            r#"
            INSERT INTO weekdays (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(day.id())
        .bind(day.name())
        .execute(pool)
        .await?;
    }
    Ok(())
}
