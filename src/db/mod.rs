mod models;

pub use models::*;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

pub type DbPool = Arc<PgPool>;

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(Arc::new(pool))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

pub async fn get_course(pool: &PgPool, course_id: &str) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE course_id = $1")
        .bind(course_id)
        .fetch_optional(pool)
        .await
}

/// A student's submissions for one course, most recent first.
pub async fn get_submissions(
    pool: &PgPool,
    course_id: &str,
    student_id: &str,
) -> Result<Vec<SubmissionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionRecord>(
        r#"
        SELECT session_label, submitted_at
        FROM submissions
        WHERE course_id = $1 AND student_id = $2
        ORDER BY submitted_at DESC
        "#,
    )
    .bind(course_id)
    .bind(student_id)
    .fetch_all(pool)
    .await
}

pub async fn get_deadlines(
    pool: &PgPool,
    course_id: &str,
) -> Result<Vec<DeadlineEntry>, sqlx::Error> {
    sqlx::query_as::<_, DeadlineEntry>(
        "SELECT session_label, deadline FROM session_deadlines WHERE course_id = $1",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await
}
