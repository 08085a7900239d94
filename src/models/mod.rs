use rusqlite::Row;

pub mod record;
pub mod user;

pub use record::{Category, CreateRecord, DraftError, ParsedDraft, Record, RecordDraft};
pub use user::{CreateUser, LoginCredentials, User};

/// Mapping from a SQLite row to a model type.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
