use chrono::Utc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Category, FromSqliteRow, Record};

/// Storage for logged entries. The table is append-only: there is no
/// update or delete here, and nothing else issues one.
#[derive(Clone)]
pub struct RecordRepository {
    pool: DbPool,
}

impl RecordRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All entries belonging to one user, most recent first.
    pub async fn find_by_owner(&self, user_id: &str) -> Result<Vec<Record>> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM records WHERE user_id = ? ORDER BY created_at DESC")?;
            let records = stmt
                .query_map([&user_id], Record::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn create(
        &self,
        user_id: &str,
        name: &str,
        category: Category,
        sets: i64,
        reps: i64,
        weight: f64,
    ) -> Result<Record> {
        let id = Uuid::new_v4().to_string();
        let record = Record {
            id: id.clone(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            category,
            sets,
            reps,
            weight,
            created_at: Utc::now(),
        };
        let record_clone = record.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO records (id, user_id, name, category, sets, reps, weight, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    record_clone.id,
                    record_clone.user_id,
                    record_clone.name,
                    record_clone.category.as_str(),
                    record_clone.sets,
                    record_clone.reps,
                    record_clone.weight,
                    record_clone.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn create_test_user(pool: &DbPool, user_id: &str) {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, datetime('now'))",
            rusqlite::params![user_id, format!("{}@example.com", user_id), "hash"],
        ).unwrap();
    }

    #[tokio::test]
    async fn test_create_record() {
        let pool = setup_test_db();
        create_test_user(&pool, "user1");
        let repo = RecordRepository::new(pool);

        let record = repo
            .create("user1", "Bench Press", Category::Upper, 3, 10, 135.0)
            .await
            .unwrap();

        assert_eq!(record.name, "Bench Press");
        assert_eq!(record.category, Category::Upper);
        assert_eq!(record.sets, 3);
        assert_eq!(record.reps, 10);
        assert_eq!(record.weight, 135.0);
        assert_eq!(record.user_id, "user1");
        assert!(!record.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_round_trips_through_storage() {
        let pool = setup_test_db();
        create_test_user(&pool, "user1");
        let repo = RecordRepository::new(pool);

        let created = repo
            .create("user1", "Squats", Category::Lower, 5, 5, 225.5)
            .await
            .unwrap();
        let records = repo.find_by_owner("user1").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, created.id);
        assert_eq!(records[0].category, Category::Lower);
        assert_eq!(records[0].weight, 225.5);
    }

    #[tokio::test]
    async fn test_find_by_owner_most_recent_first() {
        let pool = setup_test_db();
        create_test_user(&pool, "user1");
        let repo = RecordRepository::new(pool);

        repo.create("user1", "Squats", Category::Lower, 3, 10, 175.0)
            .await
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(10));
        repo.create("user1", "Bench Press", Category::Upper, 3, 10, 135.0)
            .await
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(10));
        repo.create("user1", "Squats", Category::Lower, 3, 10, 185.0)
            .await
            .unwrap();

        let records = repo.find_by_owner("user1").await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].weight, 185.0);
        assert_eq!(records[1].name, "Bench Press");
        assert_eq!(records[2].weight, 175.0);
    }

    #[tokio::test]
    async fn test_find_by_owner_isolates_users() {
        let pool = setup_test_db();
        create_test_user(&pool, "user1");
        create_test_user(&pool, "user2");
        let repo = RecordRepository::new(pool);

        repo.create("user1", "Bench Press", Category::Upper, 3, 10, 135.0)
            .await
            .unwrap();
        repo.create("user2", "Deadlift", Category::Lower, 1, 5, 315.0)
            .await
            .unwrap();

        let user1_records = repo.find_by_owner("user1").await.unwrap();
        let user2_records = repo.find_by_owner("user2").await.unwrap();

        assert_eq!(user1_records.len(), 1);
        assert_eq!(user1_records[0].name, "Bench Press");
        assert_eq!(user2_records.len(), 1);
        assert_eq!(user2_records[0].name, "Deadlift");
    }

    #[tokio::test]
    async fn test_find_by_owner_empty() {
        let pool = setup_test_db();
        create_test_user(&pool, "user1");
        let repo = RecordRepository::new(pool);

        let records = repo.find_by_owner("user1").await.unwrap();

        assert!(records.is_empty());
    }
}
