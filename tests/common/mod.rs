#![allow(dead_code)]

use axum::Router;

use splitlog::db::{create_memory_pool, DbPool};
use splitlog::handlers::{auth, records};
use splitlog::middleware::SessionContext;
use splitlog::migrations::run_migrations_for_tests;
use splitlog::models::{Category, Record, User};
use splitlog::repositories::{RecordRepository, SessionRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

/// Wire up the app exactly like main does, against a test pool.
pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let session_repo = SessionRepository::new(pool.clone());
    let record_repo = RecordRepository::new(pool.clone());

    let records_state = records::RecordsState {
        record_repo: record_repo.clone(),
    };
    let auth_state = auth::AuthState {
        user_repo: user_repo.clone(),
        session_repo: session_repo.clone(),
    };
    let session_ctx = SessionContext::new(user_repo, session_repo);

    splitlog::routes::create_router(records_state, auth_state, session_ctx)
}

pub async fn create_test_user(pool: &DbPool, email: &str, password: &str) -> User {
    let user_repo = UserRepository::new(pool.clone());
    user_repo.create(email, password).await.unwrap()
}

pub async fn create_session_cookie(pool: &DbPool, user: &User) -> String {
    let session_repo = SessionRepository::new(pool.clone());
    let token = session_repo.create(&user.id).await.unwrap();
    format!("session={}", token)
}

pub fn extract_cookie_header(set_cookie: &str) -> String {
    // Extract just the cookie name=value part for use in Cookie header
    set_cookie.split(';').next().unwrap_or("").to_string()
}

pub async fn create_test_record(
    pool: &DbPool,
    user_id: &str,
    name: &str,
    category: Category,
    sets: i64,
    reps: i64,
    weight: f64,
) -> Record {
    let record_repo = RecordRepository::new(pool.clone());
    record_repo
        .create(user_id, name, category, sets, reps, weight)
        .await
        .unwrap()
}
