//! Build-time version string, embedded by `build.rs`.

pub const GIT_VERSION: &str = env!("GIT_VERSION");
