use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh single-connection in-memory database with migrations applied
pub async fn setup_in_memory_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory db");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}
