pub mod auth;

pub use auth::{AuthRedirect, AuthUser, OptionalAuthUser, SessionContext};
