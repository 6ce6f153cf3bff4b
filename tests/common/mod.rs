#![allow(dead_code)]

use alias_shortener::infrastructure::persistence::{
    SqliteUrlRepository, connect_sqlite, run_migrations,
};
use alias_shortener::routes::{app_router, router};
use alias_shortener::state::AppState;
use alias_shortener::utils::alias::AliasGenerator;
use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// In-memory SQLite pool with the schema applied.
///
/// A single connection that is never recycled, since every `:memory:`
/// connection is a separate database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();

    pool
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let store = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));

    AppState::new(store, Arc::new(AliasGenerator::new()))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Server over the full application stack, including trailing-slash
/// normalization.
pub fn create_app_server(pool: SqlitePool) -> TestServer {
    let app = Router::new().fallback_service(app_router(create_test_state(pool)));

    TestServer::new(app).unwrap()
}

/// File-backed pool allowing several connections at once.
///
/// The returned directory must outlive the pool.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("storage.db").display());

    let pool = connect_sqlite(&url, max_connections, Duration::from_secs(5))
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    (dir, pool)
}
