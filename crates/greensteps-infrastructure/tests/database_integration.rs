use greensteps_infrastructure::persistence::Database;

#[tokio::test]
async fn database_creates_missing_directories_and_migrates() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("nested").join("data").join("test.db");
    let db_path_str = db_path.to_str().expect("utf-8 path");

    let database = Database::new(db_path_str).await.expect("open database");
    database.run_migrations().await.expect("run migrations");

    assert!(db_path.exists());

    // migrated schema is usable right away
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habit_records")
        .fetch_one(database.pool())
        .await
        .expect("query migrated table");
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn in_memory_database_migrates() {
    let database = Database::in_memory().await.expect("open in-memory db");
    database.run_migrations().await.expect("run migrations");

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habit_records")
        .fetch_one(database.pool())
        .await
        .expect("query migrated table");
    assert_eq!(rows, 0);
}
