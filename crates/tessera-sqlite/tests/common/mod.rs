#![allow(dead_code)]

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tessera_sqlite::Statement;

pub async fn create_test_pool() -> SqlitePool {
    init_tracing();
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

/// Routes `tracing` output through the test harness so assembled SQL shows
/// up next to failing assertions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub async fn execute(pool: &SqlitePool, statement: &impl Statement) {
    let sql = statement.sql();
    sqlx::query(&sql)
        .execute(pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to execute: {sql}\nError: {e}"));
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows");
    n
}

pub async fn schema_object_exists(pool: &SqlitePool, kind: &str, name: &str) -> bool {
    sqlx::query_as::<_, (String,)>("SELECT name FROM sqlite_master WHERE type = ? AND name = ?")
        .bind(kind)
        .bind(name)
        .fetch_optional(pool)
        .await
        .expect("Failed to query sqlite_master")
        .is_some()
}
