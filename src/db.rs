use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

// SQLite only enforces declared foreign keys when the pragma is set on the
// connection; the busy timeout keeps writers from surfacing SQLITE_BUSY
// under the small pool.
const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;";

pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    // Drop query parameters such as ?mode=rwc
    let path = path.split('?').next().unwrap_or(path);

    let manager = if path == ":memory:" {
        SqliteConnectionManager::memory()
    } else {
        SqliteConnectionManager::file(Path::new(path))
    };
    let manager = manager.with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

    Pool::builder().max_size(5).build(manager)
}

/// Pool over a fresh in-memory database, for tests. Capped at a single
/// connection: every in-memory connection gets its own database, so a larger
/// pool would hand out empty ones.
pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager =
        SqliteConnectionManager::memory().with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));
    Pool::builder().max_size(1).build(manager)
}
