pub mod record_repo;
pub mod session_repo;
pub mod user_repo;

pub use record_repo::RecordRepository;
pub use session_repo::SessionRepository;
pub use user_repo::UserRepository;
