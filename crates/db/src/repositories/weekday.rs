use crate::models::DbWeekday;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn list_weekdays(pool: &Pool<Postgres>) -> Result<Vec<DbWeekday>> {
    let weekdays = sqlx::query_as::<_, DbWeekday>(
        r#"
        SELECT id, name
        FROM weekdays
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(weekdays)
}
